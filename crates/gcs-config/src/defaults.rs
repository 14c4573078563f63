//! Default values.

use crate::schema::{Config, LocalizationConfig, LoggingConfig};
use gcs_common::InterfaceLanguage;
use std::path::PathBuf;

/// Default translations directory, relative to the working directory.
pub const DEFAULT_TRANSLATIONS_DIR: &str = "translations";

/// Default log filter.
pub const DEFAULT_LOG_LEVEL: &str = "info";

impl Default for Config {
    fn default() -> Self {
        Self {
            localization: LocalizationConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LocalizationConfig {
    fn default() -> Self {
        Self {
            language: InterfaceLanguage::English,
            translations_dir: PathBuf::from(DEFAULT_TRANSLATIONS_DIR),
            system_translations: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json: false,
            directory: None,
        }
    }
}
