//! Application-wide error types using thiserror.

use gcs_common::GcsError;
use gcs_i18n::{LoadError, WriteError};

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] GcsError),

    /// Translation file could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Translation file could not be written.
    #[error("Failed to write translation file: {0}")]
    Write(#[from] WriteError),

    /// Logging could not be initialised.
    #[error("Logging error: {0}")]
    Logging(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Report serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the command line tool.
pub type CliResult<T> = Result<T, CliError>;
