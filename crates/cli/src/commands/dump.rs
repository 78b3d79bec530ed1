//! `dump` / `dd` command implementation.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt;
use std::io::{self, BufRead};
use tracing::{debug, info};

use contracts::{DumpArg, DumpMode, DumperConfig, Outcome};
use dumper::{Dumper, HttpResponder};

use crate::cli::DumpArgs;
use crate::error::CliError;

/// A value given on the command line
///
/// Serializes as the parsed JSON and prints as indented JSON.
#[derive(Serialize)]
#[serde(transparent)]
pub struct CliValue(serde_json::Value);

impl CliValue {
    /// Parse `input` as JSON, keeping it as a string when that fails
    pub fn parse(input: &str, raw: bool) -> Self {
        if raw {
            return Self(serde_json::Value::String(input.to_string()));
        }
        Self(
            serde_json::from_str(input)
                .unwrap_or_else(|_| serde_json::Value::String(input.to_string())),
        )
    }
}

impl fmt::Debug for CliValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string_pretty(&self.0) {
            Ok(text) => f.write_str(&text),
            Err(_) => fmt::Debug::fmt(&self.0, f),
        }
    }
}

/// Execute `dump` or `dd`
pub fn run_dump(args: &DumpArgs, mode: DumpMode) -> Result<Outcome> {
    let config = resolve_config(args)?;
    let values = collect_values(args)?;
    info!(
        mode = %mode,
        params = values.len(),
        respond = args.respond,
        log_to_file = config.log_to_file,
        "Reporting values"
    );

    let mut dumper = Dumper::new(config);
    let mut responder = HttpResponder::new("stdout", io::stdout());
    let mut dump_args: Vec<DumpArg<'_>> = Vec::with_capacity(values.len() + 1);
    if args.respond {
        dump_args.push(DumpArg::responder(&mut responder));
    }
    dump_args.extend(values.iter().map(DumpArg::from));

    let outcome = dumper
        .report(mode, dump_args)
        .context("Failed to report values")?;
    debug!(outcome = ?outcome, "Report finished");
    Ok(outcome)
}

/// Config file (if any) with CLI overrides applied
pub fn resolve_config(args: &DumpArgs) -> Result<DumperConfig> {
    let mut config = match &args.config {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::config_not_found(path.display().to_string()).into());
            }
            config_loader::ConfigLoader::load_from_path(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?
        }
        None => DumperConfig::default(),
    };

    if args.log_to_file {
        config.log_to_file = true;
    }
    if let Some(path) = &args.log_file {
        info!(path = %path.display(), "Overriding log file path from CLI");
        config.log_file_path = path.clone();
    }

    config_loader::ConfigLoader::validate(&config)
        .map_err(|e| CliError::config_validation(e.to_string()))?;
    Ok(config)
}

fn collect_values(args: &DumpArgs) -> Result<Vec<CliValue>> {
    let mut values: Vec<CliValue> = args
        .values
        .iter()
        .map(|value| CliValue::parse(value, args.raw))
        .collect();

    if args.stdin {
        for line in io::stdin().lock().lines() {
            let line = line.map_err(CliError::Stdin)?;
            if line.trim().is_empty() {
                continue;
            }
            values.push(CliValue::parse(&line, args.raw));
        }
    }
    Ok(values)
}
