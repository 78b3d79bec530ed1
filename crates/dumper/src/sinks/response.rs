//! Responder adapters - HTTP over a writer, and an in-memory recorder

use std::io::Write;
use tracing::{debug, error, instrument};

use contracts::{ContractError, DumpResponse, JsonReply, Responder};

/// Send `body` through `status(code).json(body)`
#[instrument(
    name = "response_send",
    skip(responder, body),
    fields(responder = %responder.name(), status = ?body.status, params = body.data.len())
)]
pub fn send(
    responder: &mut dyn Responder,
    code: u16,
    body: &DumpResponse,
) -> Result<(), ContractError> {
    responder.status(code).json(body)?;
    debug!("Response sent");
    Ok(())
}

/// Responder writing a minimal HTTP/1.1 response to any writer
/// (a `TcpStream`, stdout, a buffer).
pub struct HttpResponder<W: Write> {
    name: String,
    writer: W,
    status: u16,
}

impl<W: Write> HttpResponder<W> {
    /// Create a responder over `writer`, status defaults to 200
    pub fn new(name: impl Into<String>, writer: W) -> Self {
        Self {
            name: name.into(),
            writer,
            status: 200,
        }
    }

    /// Consume the responder, returning the writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_response(&mut self, payload: &[u8]) -> std::io::Result<()> {
        write!(
            self.writer,
            "HTTP/1.1 {} {}\r\nContent-Type: application/json; charset=utf-8\r\nContent-Length: {}\r\n\r\n",
            self.status,
            reason_phrase(self.status),
            payload.len()
        )?;
        self.writer.write_all(payload)?;
        self.writer.flush()
    }
}

impl<W: Write> std::fmt::Debug for HttpResponder<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpResponder")
            .field("name", &self.name)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

impl<W: Write> Responder for HttpResponder<W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn status(&mut self, code: u16) -> &mut dyn JsonReply {
        self.status = code;
        self
    }
}

impl<W: Write> JsonReply for HttpResponder<W> {
    fn json(&mut self, body: &DumpResponse) -> Result<(), ContractError> {
        let payload = serde_json::to_vec(body)
            .map_err(|e| ContractError::response(&self.name, e.to_string()))?;
        self.write_response(&payload).map_err(|e| {
            error!(responder = %self.name, error = %e, "Write failed");
            ContractError::response(&self.name, e.to_string())
        })
    }
}

fn reason_phrase(code: u16) -> &'static str {
    match code {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "",
    }
}

/// Responder that keeps what it was sent
#[derive(Debug, Default)]
pub struct RecordedResponse {
    name: String,
    status: Option<u16>,
    body: Option<DumpResponse>,
    calls: usize,
}

impl RecordedResponse {
    /// Create an empty recorder
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Last status code set
    pub fn status_code(&self) -> Option<u16> {
        self.status
    }

    /// Last body sent
    pub fn body(&self) -> Option<&DumpResponse> {
        self.body.as_ref()
    }

    /// Number of `json` calls
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl Responder for RecordedResponse {
    fn name(&self) -> &str {
        &self.name
    }

    fn status(&mut self, code: u16) -> &mut dyn JsonReply {
        self.status = Some(code);
        self
    }
}

impl JsonReply for RecordedResponse {
    fn json(&mut self, body: &DumpResponse) -> Result<(), ContractError> {
        self.body = Some(body.clone());
        self.calls += 1;
        Ok(())
    }
}
