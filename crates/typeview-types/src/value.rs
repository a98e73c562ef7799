//! Typed values - the coerced form of a raw input string

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::PrimitiveType;

/// A value of exactly one primitive type.
///
/// The active variant always matches the [`PrimitiveType`] the value was
/// parsed under; see [`TypedValue::primitive_type`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum TypedValue {
    /// Text value, kept verbatim
    Text(String),
    /// 64-bit signed integer
    Integer(i64),
    /// 32-bit float
    Float32(f32),
    /// 64-bit float
    Float64(f64),
    /// Boolean value
    Boolean(bool),
}

impl TypedValue {
    /// Get the primitive type of this value
    pub const fn primitive_type(&self) -> PrimitiveType {
        match self {
            Self::Text(_) => PrimitiveType::Text,
            Self::Integer(_) => PrimitiveType::Integer,
            Self::Float32(_) => PrimitiveType::Float32,
            Self::Float64(_) => PrimitiveType::Float64,
            Self::Boolean(_) => PrimitiveType::Boolean,
        }
    }

    /// Try to get as text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as Integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as Float64
    pub fn as_float64(&self) -> Option<f64> {
        match self {
            Self::Float64(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get as Boolean
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::format(self))
    }
}

impl From<String> for TypedValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for TypedValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<i64> for TypedValue {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<f32> for TypedValue {
    fn from(f: f32) -> Self {
        Self::Float32(f)
    }
}

impl From<f64> for TypedValue {
    fn from(f: f64) -> Self {
        Self::Float64(f)
    }
}

impl From<bool> for TypedValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}
