//! # Contracts
//!
//! Frozen interface contracts shared by every crate of the workspace:
//! dump arguments, modes, the response interface, configuration and errors.
//! All business crates can only depend on this crate, reverse dependencies are prohibited.
//!
//! ## Time Model
//! - Every dump event carries a wall-clock UTC timestamp in ISO-8601 form
//!   (millisecond precision, `Z` suffix)

mod args;
mod config;
mod error;
mod event;
mod mode;
mod response;
mod value;

pub use args::DumpArg;
pub use config::*;
pub use error::*;
pub use event::{iso_timestamp, DumpEvent};
pub use mode::*;
pub use response::*;
pub use value::DumpValue;
