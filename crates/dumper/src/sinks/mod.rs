//! Sink implementations
//!
//! Contains ConsoleSink, LogFileSink and the Responder adapters.

mod console;
mod file;
mod response;

pub use self::console::ConsoleSink;
pub use self::file::{format_record, LogFileSink};
pub use self::response::{send, HttpResponder, RecordedResponse};
