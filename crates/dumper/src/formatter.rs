//! Formatter - console and serialized renderings of one param
//!
//! Positions are 1-based, matching the `Param N` labels.

use contracts::{ContractError, DumpArg};
use serde_json::Value;

const RESPONDER_UNSERIALIZABLE: &str = "response handles have no serialized form";

/// Console rendering, fully expanded
pub fn render(arg: &DumpArg<'_>) -> String {
    match arg {
        DumpArg::Value(value) => value.render(),
        DumpArg::Responder(responder) => format!("{responder:#?}"),
    }
}

/// Indented JSON text for the log record
///
/// # Errors
/// Serializer failure for this param, never a partial rendering
pub fn serialize(arg: &DumpArg<'_>, position: usize) -> Result<String, ContractError> {
    match arg {
        DumpArg::Value(value) => value
            .to_json_pretty()
            .map_err(|e| ContractError::serialize(position, e)),
        DumpArg::Responder(_) => Err(unserializable(position)),
    }
}

/// JSON tree for the response body
///
/// # Errors
/// Same policy as [`serialize`]
pub fn to_value(arg: &DumpArg<'_>, position: usize) -> Result<Value, ContractError> {
    match arg {
        DumpArg::Value(value) => value
            .to_json_value()
            .map_err(|e| ContractError::serialize(position, e)),
        DumpArg::Responder(_) => Err(unserializable(position)),
    }
}

/// `Param N:\n<json>` block of the log record
pub fn labeled_block(position: usize, serialized: &str) -> String {
    format!("Param {position}:\n{serialized}")
}

fn unserializable(position: usize) -> ContractError {
    ContractError::Unserializable {
        position,
        message: RESPONDER_UNSERIALIZABLE.to_string(),
    }
}
