//! DumpEvent - one call site's values, title and timestamp

use chrono::{SecondsFormat, Utc};

use crate::{DumpArg, DumpMode};

/// Current UTC time as ISO-8601 with millisecond precision
/// (`2026-10-19T08:15:30.123Z`).
pub fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Transient record of a single dump call.
///
/// Lives only for the duration of the call that created it.
#[derive(Debug)]
pub struct DumpEvent<'e, 'a> {
    /// Report flavour
    pub mode: DumpMode,

    /// ISO-8601 capture time
    pub timestamp: String,

    /// Params in call order (destination already removed)
    pub values: &'e [DumpArg<'a>],
}

impl<'e, 'a> DumpEvent<'e, 'a> {
    /// Capture an event now
    pub fn capture(mode: DumpMode, values: &'e [DumpArg<'a>]) -> Self {
        Self {
            mode,
            timestamp: iso_timestamp(),
            values,
        }
    }

    /// "DUMP" or "DUMP & DIE"
    pub fn title(&self) -> &'static str {
        self.mode.title()
    }
}
