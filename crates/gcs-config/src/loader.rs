//! Configuration loading and persistence with atomic file operations.

use crate::schema::Config;
use gcs_common::{GcsError, InterfaceLanguage, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable overriding the interface language.
pub const ENV_LANGUAGE: &str = "GCS_LANGUAGE";
/// Environment variable overriding the translations directory.
pub const ENV_TRANSLATIONS_DIR: &str = "GCS_TRANSLATIONS_DIR";
/// Environment variable overriding the log filter.
pub const ENV_LOG_LEVEL: &str = "GCS_LOG_LEVEL";

/// Configuration loader with atomic file operations.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the configuration file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads configuration from file, using defaults when the file does not exist.
    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            info!("Configuration file {:?} not found, using defaults", self.path);
            return Ok(Config::default());
        }

        debug!("Loading configuration from {:?}", self.path);
        let content = fs::read_to_string(&self.path)?;
        toml::from_str(&content).map_err(|e| {
            GcsError::Serialization(format!("Invalid configuration file {:?}: {e}", self.path))
        })
    }

    /// Loads configuration, applies process environment overrides and validates it.
    pub fn load_with_env(&self) -> Result<Config> {
        let mut config = self.load()?;
        apply_env_overrides(&mut config, std::env::vars())?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to file atomically.
    pub fn save(&self, config: &Config) -> Result<()> {
        let content = toml::to_string_pretty(config)
            .map_err(|e| GcsError::Serialization(e.to_string()))?;

        let parent = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        let mut file = tempfile::NamedTempFile::new_in(parent)?;
        file.write_all(content.as_bytes())?;
        file.persist(&self.path).map_err(|e| GcsError::Io(e.error))?;

        info!("Saved configuration to {:?}", self.path);
        Ok(())
    }
}

/// Applies `GCS_*` overrides from `vars` to `config`.
pub fn apply_env_overrides<I>(config: &mut Config, vars: I) -> Result<()>
where
    I: IntoIterator<Item = (String, String)>,
{
    for (key, value) in vars {
        match key.as_str() {
            ENV_LANGUAGE => {
                config.localization.language = value.parse::<InterfaceLanguage>()?;
                debug!("Language overridden from environment: {}", config.localization.language);
            }
            ENV_TRANSLATIONS_DIR => {
                config.localization.translations_dir = PathBuf::from(value);
                debug!(
                    "Translations directory overridden from environment: {:?}",
                    config.localization.translations_dir
                );
            }
            ENV_LOG_LEVEL => config.logging.level = value,
            _ => {}
        }
    }
    Ok(())
}
