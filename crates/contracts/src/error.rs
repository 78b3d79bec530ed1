//! Layered error definitions
//!
//! Categorized by source: config / serialize / response / io

use thiserror::Error;

/// Unified error type
#[derive(Debug, Error)]
pub enum ContractError {
    // ===== Configuration Errors =====
    /// Configuration parse error
    #[error("config parse error: {message}")]
    ConfigParse {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration validation error
    #[error("config validation error at '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // ===== Serialization Errors =====
    /// Value could not be serialized by serde_json
    #[error("param {position} could not be serialized: {source}")]
    Serialize {
        position: usize,
        #[source]
        source: serde_json::Error,
    },

    /// Value has no serialized form at all (e.g. a live response handle)
    #[error("param {position} is not serializable: {message}")]
    Unserializable { position: usize, message: String },

    // ===== Response Errors =====
    /// Responder rejected the payload
    #[error("responder '{responder}' failed: {message}")]
    Response { responder: String, message: String },

    // ===== General Errors =====
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ContractError {
    /// Create configuration parse error
    pub fn config_parse(message: impl Into<String>) -> Self {
        Self::ConfigParse {
            message: message.into(),
            source: None,
        }
    }

    /// Create configuration validation error
    pub fn config_validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create serialization error for the 1-based param `position`
    pub fn serialize(position: usize, source: serde_json::Error) -> Self {
        Self::Serialize { position, source }
    }

    /// Create responder error
    pub fn response(responder: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Response {
            responder: responder.into(),
            message: message.into(),
        }
    }
}
