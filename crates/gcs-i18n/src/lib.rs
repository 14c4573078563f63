//! # GCS I18n
//!
//! Localized string lookup for the ground control station user interface.
//!
//! Translations are read from Qt Linguist `.ts` documents. This crate provides:
//!
//! - [`Catalog`]: an immutable, indexed set of translation entries
//! - [`Translator`]: an atomically swappable handle to the active catalog
//! - [`Localizer`]: application and toolkit catalogs for an interface language
//! - `%1`..`%99` placeholder substitution
//! - Serialization back to the `.ts` format
//!
//! Lookups never fail: when no finished translation exists the source string
//! is returned unchanged.
//!
//! # Example
//!
//! ```rust
//! use gcs_i18n::{tr_args, Catalog};
//!
//! # fn example() -> Result<(), gcs_i18n::LoadError> {
//! let catalog = Catalog::load(r#"<TS version="2.1" language="ru_RU">
//!   <context><name>Main</name>
//!     <message><source>Camera %1</source><translation>Камера %1</translation></message>
//!   </context>
//! </TS>"#)?;
//!
//! assert_eq!(catalog.lookup("Main", "Camera %1", tr_args![2].as_ref()), "Камера 2");
//! assert_eq!(catalog.lookup("Main", "Exit", None), "Exit");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod entry;
pub mod error;
pub mod format;
pub mod locale;
pub mod localizer;
pub mod parser;
pub mod translator;
pub mod writer;

pub use catalog::{Catalog, CatalogStats};
pub use entry::{SourceLocation, TranslationEntry, TranslationStatus};
pub use error::{LoadError, LoadResult, WriteError};
pub use format::{substitute, TranslationArgs};
pub use locale::ResourceLocator;
pub use localizer::{LocaleBundle, Localizer};
pub use translator::Translator;
pub use writer::write_ts;

pub use gcs_common::InterfaceLanguage;
