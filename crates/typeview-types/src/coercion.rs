//! Typeview value coercion
//!
//! Conversion between raw text and [`TypedValue`]s:
//! - [`parse`] coerces raw text under a declared type
//! - [`format`] produces the canonical text of a value
//! - [`render`] reinterprets a value as another permitted type
//!
//! Float values are formatted in their shortest round-trip form and always
//! keep a fractional part or exponent, so `42` as a Float64 reads `42.0`.

use std::num::IntErrorKind;
use typeview_diagnostics::{ParseFailure, Result, TypeviewError};

use crate::{CompatibilityMatrix, PrimitiveType, TypedValue};

/// Coerce raw text into a value of the given type.
///
/// - Text is taken verbatim, empty text included.
/// - Integer is base-10 `i64` with an optional leading sign and no
///   surrounding whitespace.
/// - Float32/Float64 accept decimal and scientific literals. Spellings
///   without digits (`inf`, `NaN`) are rejected, as is a literal whose
///   magnitude does not fit the float width.
/// - Boolean accepts `true` and `false` in any letter case.
pub fn parse(raw: &str, ty: PrimitiveType) -> Result<TypedValue> {
    match ty {
        PrimitiveType::Text => Ok(TypedValue::Text(raw.to_string())),
        PrimitiveType::Integer => parse_integer(raw).map(TypedValue::Integer),
        PrimitiveType::Float32 => {
            let value: f32 = parse_float(raw, ty)?;
            Ok(TypedValue::Float32(value))
        }
        PrimitiveType::Float64 => {
            let value: f64 = parse_float(raw, ty)?;
            Ok(TypedValue::Float64(value))
        }
        PrimitiveType::Boolean => parse_boolean(raw).map(TypedValue::Boolean),
    }
}

/// Produce the canonical text of a value. Never fails.
pub fn format(value: &TypedValue) -> String {
    match value {
        TypedValue::Text(s) => s.clone(),
        TypedValue::Integer(i) => i.to_string(),
        TypedValue::Float32(f) => format!("{:?}", f),
        TypedValue::Float64(f) => format!("{:?}", f),
        TypedValue::Boolean(b) => b.to_string(),
    }
}

/// Reinterpret a value as `target`.
///
/// Numeric sources are converted numerically, never re-parsed: an Integer
/// widens to either float width and Float32 widens exactly to Float64.
/// Float64 narrows to Float32 by rounding to nearest. Every type renders
/// to Text through [`format`].
///
/// A Text source is coerced on render: its content is parsed as the target
/// type, so Text `"hello"` rendered as Boolean fails with a parse error even
/// though the conversion itself is permitted.
pub fn render(value: &TypedValue, target: PrimitiveType) -> Result<TypedValue> {
    let source = value.primitive_type();
    CompatibilityMatrix::standard().check(source, target)?;

    log::debug!("rendering {} value as {}", source, target);

    match (value, target) {
        (v, t) if v.primitive_type() == t => Ok(v.clone()),
        (v, PrimitiveType::Text) => Ok(TypedValue::Text(format(v))),
        (TypedValue::Text(s), t) => parse(s, t),
        (TypedValue::Integer(i), PrimitiveType::Float32) => Ok(TypedValue::Float32(*i as f32)),
        (TypedValue::Integer(i), PrimitiveType::Float64) => Ok(TypedValue::Float64(*i as f64)),
        (TypedValue::Float32(f), PrimitiveType::Float64) => Ok(TypedValue::Float64(f64::from(*f))),
        (TypedValue::Float64(f), PrimitiveType::Float32) => {
            let narrowed = *f as f32;
            if f.is_finite() && !narrowed.is_finite() {
                return Err(TypeviewError::parse(
                    target.name(),
                    format(value),
                    ParseFailure::OutOfRange,
                ));
            }
            Ok(TypedValue::Float32(narrowed))
        }
        _ => Err(TypeviewError::incompatible(source.name(), target.name())),
    }
}

fn parse_integer(raw: &str) -> Result<i64> {
    raw.parse::<i64>().map_err(|e| {
        let reason = match e.kind() {
            IntErrorKind::Empty => ParseFailure::Empty,
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ParseFailure::Overflow,
            _ => ParseFailure::InvalidDigit,
        };
        TypeviewError::parse(PrimitiveType::Integer.name(), raw, reason)
    })
}

/// Float widths the coercion layer can parse into
trait FloatLiteral: std::str::FromStr + Copy {
    fn is_finite(self) -> bool;
}

impl FloatLiteral for f32 {
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }
}

impl FloatLiteral for f64 {
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
}

fn parse_float<F: FloatLiteral>(raw: &str, ty: PrimitiveType) -> Result<F> {
    let fail = |reason| TypeviewError::parse(ty.name(), raw, reason);

    if raw.is_empty() {
        return Err(fail(ParseFailure::Empty));
    }
    // Rust also accepts "inf" and "NaN"; only digit-bearing literals count
    if !raw.bytes().any(|b| b.is_ascii_digit()) {
        return Err(fail(ParseFailure::InvalidFloat));
    }

    let value = raw
        .parse::<F>()
        .map_err(|_| fail(ParseFailure::InvalidFloat))?;
    if !value.is_finite() {
        return Err(fail(ParseFailure::OutOfRange));
    }
    Ok(value)
}

fn parse_boolean(raw: &str) -> Result<bool> {
    if raw.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        let reason = if raw.is_empty() {
            ParseFailure::Empty
        } else {
            ParseFailure::NotABoolean
        };
        Err(TypeviewError::parse(PrimitiveType::Boolean.name(), raw, reason))
    }
}
