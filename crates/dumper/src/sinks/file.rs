//! LogFileSink - appends one free-text record per console report

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, error, instrument};

use contracts::DumpEvent;

/// Sink that appends dump records to a single file.
///
/// No rotation, no size limit, no locking: each record is one `write_all`
/// on a file opened in append mode.
pub struct LogFileSink {
    path: PathBuf,
}

impl LogFileSink {
    /// Create a sink for `path`; the file is created on first append
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Destination path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append the record for `event`, whose serialized params are `blocks`
    #[instrument(
        name = "log_file_append",
        skip(self, event, blocks),
        fields(path = %self.path.display(), title = event.title())
    )]
    pub fn append(&self, event: &DumpEvent<'_, '_>, blocks: &[String]) -> io::Result<()> {
        let record = format_record(event, blocks);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .inspect_err(|e| error!(error = %e, "Open failed"))?;
        file.write_all(record.as_bytes())
            .inspect_err(|e| error!(error = %e, "Append failed"))?;

        debug!(bytes = record.len(), "Record appended");
        Ok(())
    }
}

/// `\n[<timestamp>] <title>:\n<blocks joined by a blank line>\n`
pub fn format_record(event: &DumpEvent<'_, '_>, blocks: &[String]) -> String {
    format!(
        "\n[{}] {}:\n{}\n",
        event.timestamp,
        event.title(),
        blocks.join("\n\n")
    )
}
