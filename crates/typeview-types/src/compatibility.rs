//! Conversion compatibility rules
//!
//! Declares, for every source type, which target types a value may be
//! displayed as. Text and numbers always collapse to Text, numbers convert
//! among themselves, and nothing numeric becomes Boolean.

use typeview_diagnostics::{Result, TypeviewError};

use crate::PrimitiveType;

use PrimitiveType::{Boolean, Float32, Float64, Integer, Text};

/// Source type -> permitted targets, self listed first
static STANDARD: CompatibilityMatrix = CompatibilityMatrix {
    rows: &[
        (Text, &[Text, Integer, Float32, Float64, Boolean]),
        (Integer, &[Integer, Text, Float32, Float64]),
        (Float32, &[Float32, Text, Float64]),
        (Float64, &[Float64, Text, Float32]),
        (Boolean, &[Boolean, Text]),
    ],
};

/// Immutable table of permitted source -> target conversions
#[derive(Debug, Clone, Copy)]
pub struct CompatibilityMatrix {
    rows: &'static [(PrimitiveType, &'static [PrimitiveType])],
}

impl CompatibilityMatrix {
    /// The fixed conversion table
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Targets a value of `source` may be displayed as, in table order.
    ///
    /// A source without a row has no targets.
    pub fn targets(&self, source: PrimitiveType) -> &'static [PrimitiveType] {
        self.rows
            .iter()
            .find(|(s, _)| *s == source)
            .map(|(_, targets)| *targets)
            .unwrap_or(&[])
    }

    /// Check if a `source` value may be displayed as `target`
    pub fn is_allowed(&self, source: PrimitiveType, target: PrimitiveType) -> bool {
        self.targets(source).contains(&target)
    }

    /// Check type-name tokens. An unrecognized source token has no
    /// permitted targets, so the answer is `false` rather than an error.
    pub fn is_allowed_token(&self, source: &str, target: &str) -> bool {
        match (
            PrimitiveType::from_token(source),
            PrimitiveType::from_token(target),
        ) {
            (Some(s), Some(t)) => self.is_allowed(s, t),
            _ => false,
        }
    }

    /// Like [`is_allowed`](Self::is_allowed), failing with an incompatible
    /// conversion error
    pub fn check(&self, source: PrimitiveType, target: PrimitiveType) -> Result<()> {
        if self.is_allowed(source, target) {
            Ok(())
        } else {
            Err(TypeviewError::incompatible(source.name(), target.name()))
        }
    }
}
