//! GCS translation tool - main entry point.

use clap::Parser;
use gcs_config::ConfigLoader;
use gcs_tr::{logging, run, Cli};
use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Configuration comes first: it decides where logs go
    let mut config = match ConfigLoader::new(&cli.config).load_with_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("gcs-tr: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(level) = &cli.log_level {
        config.logging.level.clone_from(level);
    }

    let _guard = match logging::init(&config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("gcs-tr: {e}");
            return ExitCode::FAILURE;
        }
    };
    debug!("Configuration loaded from {:?}", cli.config);

    let stdout = std::io::stdout();
    match run(&cli, &config, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("gcs-tr: {e}");
            ExitCode::FAILURE
        }
    }
}
