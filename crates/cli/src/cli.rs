//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// dumpdie - print values for inspection, optionally stop with status 1
#[derive(Parser, Debug)]
#[command(
    name = "dumpdie",
    author,
    version,
    about = "Dump values to the console, a log file or an HTTP response",
    long_about = "Prints each value with a banner and a per-param label.\n\n\
                  `dump` keeps going, `dd` exits with status 1 after reporting. \n\
                  Values are parsed as JSON, falling back to plain strings."
)]
pub struct Cli {
    /// Increase diagnostics verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true, env = "DUMPDIE_VERBOSE")]
    pub verbose: u8,

    /// Suppress all diagnostics except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Diagnostics format (written to stderr)
    #[arg(
        long,
        value_enum,
        default_value = "pretty",
        global = true,
        env = "DUMPDIE_LOG_FORMAT"
    )]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report values and exit successfully
    Dump(DumpArgs),

    /// Report values, then exit with status 1
    Dd(DumpArgs),

    /// Validate a configuration file
    Validate(ValidateArgs),
}

/// Arguments shared by `dump` and `dd`
#[derive(Args, Debug, Clone)]
pub struct DumpArgs {
    /// Values to report (JSON, or plain text)
    pub values: Vec<String>,

    /// Also read one value per line from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Treat every value as a plain string, skip JSON parsing
    #[arg(long)]
    pub raw: bool,

    /// Send the report as an HTTP/1.1 JSON response on stdout
    #[arg(long)]
    pub respond: bool,

    /// Path to configuration file (TOML or JSON)
    #[arg(short, long, env = "DUMPDIE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Append console reports to the log file
    #[arg(long)]
    pub log_to_file: bool,

    /// Override the log file path
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Arguments for the `validate` command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to configuration file to validate
    #[arg(short, long, default_value = "dumper.toml")]
    pub config: PathBuf,

    /// Output validation result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Log output format
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum LogFormat {
    /// JSON structured logging
    Json,
    /// Human-readable pretty format
    #[default]
    Pretty,
    /// Compact single-line format
    Compact,
}

impl From<LogFormat> for observability::LogFormat {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Json => Self::Json,
            LogFormat::Pretty => Self::Pretty,
            LogFormat::Compact => Self::Compact,
        }
    }
}
