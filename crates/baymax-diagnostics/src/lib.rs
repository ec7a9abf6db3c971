//! Baymax diagnostics and error handling
//!
//! This crate provides the error handling infrastructure shared by the
//! dashboard crates: structured error codes, the user-facing error taxonomy,
//! and the set of long-running operations that errors refer to.

mod error;
mod error_code;
mod operation;

pub use error::*;
pub use error_code::*;
pub use operation::*;

/// Result type for Baymax operations
pub type Result<T> = std::result::Result<T, BaymaxError>;
