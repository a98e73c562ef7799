//! Typeview diagnostics and error handling
//!
//! This crate provides the error taxonomy shared by the type and session
//! crates: structured error codes and the [`TypeviewError`] enum.

mod error;
mod error_code;

pub use error::*;
pub use error_code::*;

/// Result type for Typeview operations
pub type Result<T> = std::result::Result<T, TypeviewError>;
