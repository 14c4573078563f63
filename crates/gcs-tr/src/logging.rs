//! Tracing subscriber setup.

use crate::error::{CliError, CliResult};
use gcs_config::LoggingConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File name prefix of the daily log files.
pub const LOG_FILE_PREFIX: &str = "gcs-tr.log";

/// Build the filter: `RUST_LOG` when set, otherwise `level`.
pub fn build_filter(level: &str) -> CliResult<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| CliError::Logging(format!("invalid log filter {level:?}: {e}")))
}

/// Install the global subscriber.
///
/// Console output goes to standard error so command output stays clean.
/// When a log directory is configured, a daily rolling file is written as
/// well; the returned guard must be held until exit to flush it.
pub fn init(config: &LoggingConfig) -> CliResult<Option<WorkerGuard>> {
    let filter = build_filter(&config.level)?;

    let (file_layer, guard) = match &config.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().with_ansi(false).with_writer(writer)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    let registry = tracing_subscriber::registry().with(filter).with(file_layer);
    let result = if config.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };
    result.map_err(|e| CliError::Logging(e.to_string()))?;

    Ok(guard)
}
