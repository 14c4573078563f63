//! Configuration schema definitions using serde.

use gcs_common::InterfaceLanguage;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Localization configuration.
    pub localization: LocalizationConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Localization configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalizationConfig {
    /// Interface language.
    pub language: InterfaceLanguage,
    /// Directory holding the `.ts` translation files.
    pub translations_dir: PathBuf,
    /// Whether to load toolkit translations for standard dialogs.
    pub system_translations: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
    /// Directory for daily rolling log files.
    pub directory: Option<PathBuf>,
}
