//! Dumper - routes a dump call to the console/file path or the response path

use std::io::{self, Write};
use tracing::{debug, info, instrument};

use contracts::{
    DumpArg, DumpEvent, DumpMode, DumpResponse, DumperConfig, Outcome, Responder,
    ResponseStatus, RESPONSE_STATUS_CODE,
};

use crate::error::DumpError;
use crate::formatter;
use crate::selector::{self, Selection, Target};
use crate::sinks::{self, ConsoleSink, LogFileSink};

/// Reports dump calls.
///
/// Never exits the process itself: every report returns an [`Outcome`] and
/// the caller enforces it.
pub struct Dumper<W: Write = io::Stdout> {
    config: DumperConfig,
    console: ConsoleSink<W>,
    log_file: Option<LogFileSink>,
}

impl Dumper<io::Stdout> {
    /// Dumper printing to stdout
    pub fn new(config: DumperConfig) -> Self {
        Self::with_console(config, io::stdout())
    }
}

impl Default for Dumper<io::Stdout> {
    fn default() -> Self {
        Self::new(DumperConfig::default())
    }
}

impl<W: Write> Dumper<W> {
    /// Dumper printing to `writer`
    pub fn with_console(config: DumperConfig, writer: W) -> Self {
        let log_file = config
            .log_to_file
            .then(|| LogFileSink::new(&config.log_file_path));
        Self {
            config,
            console: ConsoleSink::new(writer),
            log_file,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &DumperConfig {
        &self.config
    }

    /// Console writer
    pub fn console(&self) -> &W {
        self.console.get_ref()
    }

    /// Consume the dumper, returning the console writer
    pub fn into_console(self) -> W {
        self.console.into_inner()
    }

    /// Report `args` and keep running
    pub fn dump(&mut self, args: Vec<DumpArg<'_>>) -> Result<Outcome, DumpError> {
        self.report(DumpMode::Dump, args)
    }

    /// Report `args`, then ask the caller to terminate
    pub fn dd(&mut self, args: Vec<DumpArg<'_>>) -> Result<Outcome, DumpError> {
        self.report(DumpMode::DumpAndDie, args)
    }

    /// Route `args` by their first element and report them in `mode`
    #[instrument(name = "dumper_report", skip_all, fields(mode = %mode, args = args.len()))]
    pub fn report(&mut self, mode: DumpMode, args: Vec<DumpArg<'_>>) -> Result<Outcome, DumpError> {
        let Selection { target, values } = selector::select(args);
        let event = DumpEvent::capture(mode, &values);
        match target {
            Target::Console => self.report_console(&event)?,
            Target::Response(responder) => report_response(responder, &event)?,
        }

        let outcome = mode.outcome();
        if outcome == Outcome::Terminate {
            info!(title = mode.title(), "Report complete, termination requested");
        }
        Ok(outcome)
    }

    fn report_console(&mut self, event: &DumpEvent<'_, '_>) -> Result<(), DumpError> {
        let written = self.write_console_report(event);
        let flushed = self.console.flush().map_err(DumpError::Console);
        written?;
        flushed?;

        debug!(params = event.values.len(), "Console report written");
        Ok(())
    }

    fn write_console_report(&mut self, event: &DumpEvent<'_, '_>) -> Result<(), DumpError> {
        self.console.banner(event).map_err(DumpError::Console)?;

        let mut blocks = Vec::with_capacity(event.values.len());
        for (index, arg) in event.values.iter().enumerate() {
            let position = index + 1;
            self.console
                .param(position, &formatter::render(arg))
                .map_err(DumpError::Console)?;
            let serialized = formatter::serialize(arg, position)?;
            blocks.push(formatter::labeled_block(position, &serialized));
        }

        if let Some(log_file) = &self.log_file {
            log_file
                .append(event, &blocks)
                .map_err(|e| DumpError::log_file(log_file.path(), e))?;
        }

        if event.mode.terminates() {
            self.console.stopped().map_err(DumpError::Console)?;
        }
        Ok(())
    }
}

/// Build the response body for `event`
///
/// # Errors
/// First param that cannot be turned into JSON
pub fn response_body(event: &DumpEvent<'_, '_>) -> Result<DumpResponse, DumpError> {
    let data = event
        .values
        .iter()
        .enumerate()
        .map(|(index, arg)| formatter::to_value(arg, index + 1))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(DumpResponse {
        status: ResponseStatus::from(event.mode),
        timestamp: event.timestamp.clone(),
        data,
    })
}

fn report_response(
    responder: &mut dyn Responder,
    event: &DumpEvent<'_, '_>,
) -> Result<(), DumpError> {
    let body = response_body(event)?;
    sinks::send(responder, RESPONSE_STATUS_CODE, &body)?;
    Ok(())
}
