//! DumpMode / Outcome - what a report does and what the caller must do next

use serde::{Deserialize, Serialize};
use std::fmt;

/// Exit status used when a report ends the process.
pub const TERMINATE_EXIT_CODE: i32 = 1;

/// Report flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DumpMode {
    /// Report and keep running
    Dump,
    /// Report, then terminate
    DumpAndDie,
}

impl DumpMode {
    /// Banner / log title
    pub fn title(self) -> &'static str {
        match self {
            Self::Dump => "DUMP",
            Self::DumpAndDie => "DUMP & DIE",
        }
    }

    /// Whether reports in this mode end the process
    pub fn terminates(self) -> bool {
        matches!(self, Self::DumpAndDie)
    }

    /// Outcome a successful report in this mode yields
    pub fn outcome(self) -> Outcome {
        if self.terminates() {
            Outcome::Terminate
        } else {
            Outcome::Continue
        }
    }
}

impl fmt::Display for DumpMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Signal returned by every report.
///
/// Reports never exit on their own; the entry point decides.
#[must_use = "a Terminate outcome must be enforced by the caller"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Keep running
    Continue,
    /// End the process with [`TERMINATE_EXIT_CODE`]
    Terminate,
}

impl Outcome {
    /// Process exit code the caller should use, if any
    pub fn exit_code(self) -> Option<i32> {
        match self {
            Self::Continue => None,
            Self::Terminate => Some(TERMINATE_EXIT_CODE),
        }
    }

    /// Exit the process on `Terminate`, no-op on `Continue`.
    pub fn enforce(self) {
        if let Some(code) = self.exit_code() {
            std::process::exit(code);
        }
    }
}
