//! # GCS Config
//!
//! Type-safe configuration management for the ground control station
//! localization tools.
//!
//! This crate provides configuration loading, validation, environment
//! overrides and atomic persistence.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use defaults::*;
pub use loader::*;
pub use schema::*;
