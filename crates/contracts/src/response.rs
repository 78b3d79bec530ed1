//! Responder - structured-response destination interface
//!
//! Mirrors the `status(code).json(body)` shape of HTTP response objects.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{ContractError, DumpMode};

/// Status code sent on the response path
pub const RESPONSE_STATUS_CODE: u16 = 200;

/// `status` field of the response body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    /// Sent by `dump`
    Debug,
    /// Sent by `dd`
    Terminated,
}

impl From<DumpMode> for ResponseStatus {
    fn from(mode: DumpMode) -> Self {
        match mode {
            DumpMode::Dump => Self::Debug,
            DumpMode::DumpAndDie => Self::Terminated,
        }
    }
}

/// Response-path body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DumpResponse {
    /// "debug" or "terminated"
    pub status: ResponseStatus,

    /// ISO-8601, captured when the body is built
    pub timestamp: String,

    /// Remaining params, in call order
    pub data: Vec<serde_json::Value>,
}

/// Second half of `status(code).json(body)`
pub trait JsonReply {
    /// Send `body` as the JSON payload
    ///
    /// # Errors
    /// Whatever the underlying response object fails with
    fn json(&mut self, body: &DumpResponse) -> Result<(), ContractError>;
}

/// Response-capable destination
///
/// Any implementor is treated as a response when passed as the first
/// argument, whatever it actually wraps.
pub trait Responder: fmt::Debug {
    /// Responder name (used for logging/errors)
    fn name(&self) -> &str;

    /// Set the status code, returning the JSON half of the response
    fn status(&mut self, code: u16) -> &mut dyn JsonReply;
}
