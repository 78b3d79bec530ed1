//! # dumpdie CLI
//!
//! 命令行接口入口点。
//!
//! 提供：
//! - 对命令行参数或 stdin 中的值执行 `dump` / `dd`
//! - 配置加载与验证
//! - dump-and-die 真正结束进程的地方

mod cli;
mod commands;
mod error;

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing::info;

use cli::{Cli, Commands};
use commands::{run_dump, run_validate};
use contracts::{DumpMode, Outcome};

fn main() -> Result<ExitCode> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_logging(&cli)?;

    info!(version = env!("CARGO_PKG_VERSION"), "dumpdie starting");

    let result = match &cli.command {
        Commands::Dump(args) => run_dump(args, DumpMode::Dump),
        Commands::Dd(args) => run_dump(args, DumpMode::DumpAndDie),
        Commands::Validate(args) => run_validate(args).map(|()| Outcome::Continue),
    };

    match result {
        Ok(outcome) => Ok(exit_code(outcome)),
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            Err(e)
        }
    }
}

/// Map a report outcome to the process exit status
fn exit_code(outcome: Outcome) -> ExitCode {
    match outcome.exit_code() {
        None => ExitCode::SUCCESS,
        Some(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
    }
}

/// Initialize logging based on CLI options
fn init_logging(cli: &Cli) -> Result<()> {
    let (level, force_level) = if cli.quiet {
        ("error", true)
    } else {
        let level = match cli.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        (level, false)
    };

    observability::init_with_config(observability::ObservabilityConfig {
        log_format: cli.log_format.into(),
        default_log_level: level.to_string(),
        force_level,
    })
}
