//! Typeview error types

use crate::{ErrorCode, TV0001, TV0100, TV0101, TV0401};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Which type selection a type-name token was supplied for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeRole {
    /// The declared type of the entered value
    Source,
    /// The type the value should be displayed as
    Target,
}

impl fmt::Display for TypeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRole::Source => write!(f, "source"),
            TypeRole::Target => write!(f, "target"),
        }
    }
}

/// Lexical reason a raw literal was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParseFailure {
    /// Nothing was entered
    Empty,
    /// A character that is not a base-10 digit
    InvalidDigit,
    /// Integer outside the 64-bit signed range
    Overflow,
    /// Not a decimal or scientific float literal
    InvalidFloat,
    /// Finite literal too large for the float width
    OutOfRange,
    /// Anything but true/false
    NotABoolean,
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseFailure::Empty => write!(f, "empty input"),
            ParseFailure::InvalidDigit => write!(f, "invalid digit"),
            ParseFailure::Overflow => write!(f, "number too large"),
            ParseFailure::InvalidFloat => write!(f, "invalid number format"),
            ParseFailure::OutOfRange => write!(f, "value out of range"),
            ParseFailure::NotABoolean => write!(f, "expected true or false"),
        }
    }
}

/// Main Typeview error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TypeviewError {
    /// A type-name token does not name one of the known types
    #[error("{code}: unknown {role} type '{token}'", code = TV0100)]
    InvalidType { role: TypeRole, token: String },

    /// Raw text does not lexically match the requested type
    #[error("{code}: '{raw}' is not a valid {target} ({reason})", code = TV0001)]
    Parse {
        target: String,
        raw: String,
        reason: ParseFailure,
    },

    /// Both types are known but the pair is not permitted
    #[error("{code}: conversion from {from} to {to} is not permitted", code = TV0101)]
    IncompatibleConversion { from: String, to: String },

    /// Collaborator or internal failure
    #[error("{code}: {message}")]
    System { code: ErrorCode, message: String },
}

impl TypeviewError {
    /// Create an invalid type error
    pub fn invalid_type(role: TypeRole, token: impl Into<String>) -> Self {
        Self::InvalidType {
            role,
            token: token.into(),
        }
    }

    /// Create a parse error
    pub fn parse(target: impl Into<String>, raw: impl Into<String>, reason: ParseFailure) -> Self {
        Self::Parse {
            target: target.into(),
            raw: raw.into(),
            reason,
        }
    }

    /// Create an incompatible conversion error
    pub fn incompatible(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::IncompatibleConversion {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Create a system error
    pub fn system(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::System {
            code,
            message: message.into(),
        }
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidType { .. } => TV0100,
            Self::Parse { .. } => TV0001,
            Self::IncompatibleConversion { .. } => TV0101,
            Self::System { code, .. } => *code,
        }
    }

    /// Message shown to the user by an output collaborator
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidType { role, token } => {
                format!("Invalid {} type '{}'", role, token)
            }
            Self::Parse { target, raw, reason } => {
                format!("The value '{}' is not a valid {} ({})", raw, target, reason)
            }
            Self::IncompatibleConversion { from, to } => {
                format!("Conversion from {} to {} is not permitted", from, to)
            }
            Self::System { message, .. } => message.clone(),
        }
    }

    /// Help text for the error code, if any
    pub fn help(&self) -> Option<&'static str> {
        self.code().info().help
    }
}

impl From<std::io::Error> for TypeviewError {
    fn from(err: std::io::Error) -> Self {
        Self::system(TV0401, err.to_string())
    }
}
