//! Dumper error types

use std::path::PathBuf;
use thiserror::Error;

/// Dumper-specific errors
///
/// Every failure of a report surfaces here unchanged; nothing is retried.
#[derive(Debug, Error)]
pub enum DumpError {
    /// Serialization or responder failure (from contract)
    #[error(transparent)]
    Contract(#[from] contracts::ContractError),

    /// Console write failed
    #[error("console write error: {0}")]
    Console(#[source] std::io::Error),

    /// Log file append failed
    #[error("failed to append to log file '{}': {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DumpError {
    /// Create a log file error
    pub fn log_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::LogFile {
            path: path.into(),
            source,
        }
    }
}
