//! Typeview error codes following a structured numbering system
//!
//! Error code ranges:
//! - TV0001-TV0099: Parse errors (raw text does not match a type)
//! - TV0100-TV0199: Semantic errors (unknown type names, disallowed conversions)
//! - TV0400-TV0499: System errors (collaborator I/O)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }

    /// Check if this is a parse error (0001-0099)
    pub const fn is_parse_error(&self) -> bool {
        self.0 >= 1 && self.0 < 100
    }

    /// Check if this is a semantic error (0100-0199)
    pub const fn is_semantic_error(&self) -> bool {
        self.0 >= 100 && self.0 < 200
    }

    /// Check if this is a system error (0400-0499)
    pub const fn is_system_error(&self) -> bool {
        self.0 >= 400 && self.0 < 500
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TV{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Parse errors (0001-0099)
    map.insert(
        1,
        ErrorInfo::new("Value does not match declared type")
            .with_help("Integers are base-10, floats use decimal or scientific notation, booleans are true/false"),
    );

    // Semantic errors (0100-0199)
    map.insert(
        100,
        ErrorInfo::new("Unknown type name")
            .with_help("Valid types: text, integer, float32, float64, boolean"),
    );
    map.insert(101, ErrorInfo::new("Conversion not permitted"));

    // System errors (0400-0499)
    map.insert(400, ErrorInfo::new("Internal error"));
    map.insert(401, ErrorInfo::new("I/O error"));

    map
});

// Parse errors
pub const TV0001: ErrorCode = ErrorCode::new(1);

// Semantic errors
pub const TV0100: ErrorCode = ErrorCode::new(100);
pub const TV0101: ErrorCode = ErrorCode::new(101);

// System errors
pub const TV0400: ErrorCode = ErrorCode::new(400);
pub const TV0401: ErrorCode = ErrorCode::new(401);
