//! DumpValue - anything that can be dumped
//!
//! Object-safe so a call site can mix unrelated types in one dump.

use serde::Serialize;
use std::fmt;

/// A value that can be rendered for the console and serialized for the log.
///
/// Implemented for every `Debug + Serialize` type; there is no need to
/// implement it by hand.
pub trait DumpValue {
    /// Pretty `Debug` rendering, fully expanded.
    fn render(&self) -> String;

    /// Indented JSON text (two spaces), field order preserved.
    fn to_json_pretty(&self) -> Result<String, serde_json::Error>;

    /// JSON tree used as response payload data.
    fn to_json_value(&self) -> Result<serde_json::Value, serde_json::Error>;
}

impl<T> DumpValue for T
where
    T: fmt::Debug + Serialize + ?Sized,
{
    fn render(&self) -> String {
        format!("{self:#?}")
    }

    fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    fn to_json_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}
