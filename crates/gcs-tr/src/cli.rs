//! Command line definitions and dispatch.

use crate::commands::{run_check, run_lookup, run_normalize, run_untranslated};
use crate::error::CliResult;
use clap::{Args, Parser, Subcommand};
use gcs_config::Config;
use std::io::Write;
use std::path::PathBuf;

/// Configuration file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "gcs.toml";

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "gcs-tr", author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path.
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Log filter, overriding the configured level.
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// Command to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Parse a translation file and report its status counts.
    Check(CheckArgs),

    /// Resolve a display string the way the interface would.
    Lookup(LookupArgs),

    /// List messages that still lack a usable translation.
    Untranslated(UntranslatedArgs),

    /// Rewrite a translation file in canonical form.
    Normalize(NormalizeArgs),
}

/// Arguments for `check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Translation file to check.
    pub file: PathBuf,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `lookup`.
#[derive(Debug, Args)]
pub struct LookupArgs {
    /// Look up in this file instead of the configured language.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Disambiguation comment distinguishing identical sources.
    #[arg(short, long)]
    pub disambiguation: Option<String>,

    /// Context the message belongs to, usually a widget class name.
    pub context: String,

    /// Source text as written in the code.
    pub source: String,

    /// Values for `%1`, `%2`, ...
    pub args: Vec<String>,
}

/// Arguments for `untranslated`.
#[derive(Debug, Args)]
pub struct UntranslatedArgs {
    /// Translation file to inspect.
    pub file: PathBuf,

    /// Shorten source texts longer than this many characters.
    #[arg(long)]
    pub max_chars: Option<usize>,
}

/// Arguments for `normalize`.
#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Translation file to normalize.
    pub file: PathBuf,

    /// Output file; standard output when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Run `cli.command`, writing results to `out`.
pub fn run<W: Write>(cli: &Cli, config: &Config, out: &mut W) -> CliResult<()> {
    match &cli.command {
        Commands::Check(args) => run_check(args, out),
        Commands::Lookup(args) => run_lookup(args, config, out),
        Commands::Untranslated(args) => run_untranslated(args, out),
        Commands::Normalize(args) => run_normalize(args, out),
    }
}
