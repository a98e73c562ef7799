//! Typeview primitive types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use typeview_diagnostics::{TypeRole, TypeviewError};

/// The value kinds a user can enter and view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveType {
    /// Free text
    Text,
    /// 64-bit signed integer
    Integer,
    /// 32-bit float
    Float32,
    /// 64-bit float
    Float64,
    /// true/false
    Boolean,
}

impl PrimitiveType {
    /// All types, in compatibility-table order
    pub const ALL: [PrimitiveType; 5] = [
        Self::Text,
        Self::Integer,
        Self::Float32,
        Self::Float64,
        Self::Boolean,
    ];

    /// Get the display name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Integer => "Integer",
            Self::Float32 => "Float32",
            Self::Float64 => "Float64",
            Self::Boolean => "Boolean",
        }
    }

    /// Get the lowercase token users type to select this type
    pub const fn token(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Boolean => "boolean",
        }
    }

    /// Resolve a user-supplied type name.
    ///
    /// Matching ignores case and surrounding whitespace. Besides the
    /// canonical tokens, the short aliases `string`, `int`, `float`,
    /// `double` and `bool` are accepted.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "text" | "string" => Some(Self::Text),
            "integer" | "int" => Some(Self::Integer),
            "float32" | "float" => Some(Self::Float32),
            "float64" | "double" => Some(Self::Float64),
            "boolean" | "bool" => Some(Self::Boolean),
            _ => None,
        }
    }

    /// Resolve a type name for the given selection, failing with an
    /// invalid type error
    pub fn resolve(token: &str, role: TypeRole) -> typeview_diagnostics::Result<Self> {
        Self::from_token(token).ok_or_else(|| TypeviewError::invalid_type(role, token))
    }

    /// Check if this type is numeric
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer | Self::Float32 | Self::Float64)
    }

    /// Prompt hint listing the selectable tokens, e.g. `text/integer/...`
    pub fn choices() -> String {
        Self::ALL
            .iter()
            .map(|t| t.token())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PrimitiveType {
    type Err = TypeviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s, TypeRole::Source)
    }
}
