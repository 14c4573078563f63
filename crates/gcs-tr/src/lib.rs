//! # GCS Tr
//!
//! Command line tool for checking, querying and normalizing the ground
//! control station's Qt Linguist translation files.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;

pub use cli::*;
pub use error::*;
