//! Command implementations.

mod dump;
mod validate;

pub use dump::run_dump;
pub use validate::run_validate;
