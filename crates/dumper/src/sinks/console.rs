//! ConsoleSink - human-readable report on any writer (stdout by default)

use std::io::{self, Write};

use contracts::DumpEvent;

const BANNER_WIDTH: usize = 50;
const BANNER_CHAR: &str = "█";

/// Sink that prints banners, params and the termination notice
pub struct ConsoleSink<W: Write> {
    writer: W,
}

impl ConsoleSink<io::Stdout> {
    /// Console sink on the process stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleSink<W> {
    /// Create a console sink over `writer`
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Underlying writer
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Consume the sink, returning the writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Separator, title and timestamp
    pub fn banner(&mut self, event: &DumpEvent<'_, '_>) -> io::Result<()> {
        let bar = banner_bar();
        write!(
            self.writer,
            "\n{bar}\n🔍 {} at {}\n{bar}\n\n",
            event.title(),
            event.timestamp
        )
    }

    /// `👉 Param N:` followed by the rendering
    pub fn param(&mut self, position: usize, rendered: &str) -> io::Result<()> {
        writeln!(self.writer, "👉 Param {position}:")?;
        writeln!(self.writer, "{rendered}")
    }

    /// Notice printed right before a dump-and-die hands back control
    pub fn stopped(&mut self) -> io::Result<()> {
        writeln!(self.writer, "\n🚫 Execution stopped.\n")
    }

    /// Flush; the process may exit right after a report
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

fn banner_bar() -> String {
    BANNER_CHAR.repeat(BANNER_WIDTH)
}
