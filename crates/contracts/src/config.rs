//! Dumper configuration contracts that can be shared across crates.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name of the default append log
pub const DEFAULT_LOG_FILE_NAME: &str = "debug.log";

/// Dumper configuration
///
/// Owned by a `Dumper` for its whole lifetime; never changed per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DumperConfig {
    /// Append every console report to `log_file_path`
    #[serde(default)]
    pub log_to_file: bool,

    /// Append log destination
    #[serde(default = "default_log_file_path")]
    pub log_file_path: PathBuf,
}

impl Default for DumperConfig {
    fn default() -> Self {
        Self {
            log_to_file: false,
            log_file_path: default_log_file_path(),
        }
    }
}

impl DumperConfig {
    /// Config with file logging enabled at `path`
    pub fn logging_to(path: impl Into<PathBuf>) -> Self {
        Self {
            log_to_file: true,
            log_file_path: path.into(),
        }
    }
}

/// `debug.log` next to this crate's manifest
pub fn default_log_file_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_LOG_FILE_NAME)
}
