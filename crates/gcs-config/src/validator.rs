//! Runtime validation.

use crate::schema::Config;
use gcs_common::{GcsError, Result};
use tracing::warn;

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.localization.translations_dir.as_os_str().is_empty() {
            return Err(GcsError::Config(
                "Translations directory cannot be empty".to_string(),
            ));
        }

        if self.logging.level.trim().is_empty() {
            return Err(GcsError::Config("Log level cannot be empty".to_string()));
        }

        if self
            .logging
            .directory
            .as_ref()
            .is_some_and(|dir| dir.as_os_str().is_empty())
        {
            return Err(GcsError::Config(
                "Log directory cannot be empty when set".to_string(),
            ));
        }

        if !self.localization.translations_dir.is_dir() {
            warn!(
                "Translations directory {:?} does not exist, source strings will be shown",
                self.localization.translations_dir
            );
        }

        Ok(())
    }
}
