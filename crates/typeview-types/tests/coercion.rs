//! Parsing, formatting and rendering tests for the typeview type system
//!
//! Covers:
//! - Canonical round-trips (parse then format)
//! - Malformed literals per type
//! - Numeric widening and text coercion on render

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use typeview_diagnostics::{ParseFailure, TypeviewError};
use typeview_types::*;

// === Canonical Round-Trips ===

#[rstest]
#[case(PrimitiveType::Text, "hello world", "hello world")]
#[case(PrimitiveType::Text, "", "")]
#[case(PrimitiveType::Text, "  padded ", "  padded ")]
#[case(PrimitiveType::Integer, "007", "7")]
#[case(PrimitiveType::Integer, "+42", "42")]
#[case(PrimitiveType::Integer, "-0", "0")]
#[case(PrimitiveType::Integer, "-9223372036854775808", "-9223372036854775808")]
#[case(PrimitiveType::Float32, "3.5", "3.5")]
#[case(PrimitiveType::Float32, "0.1", "0.1")]
#[case(PrimitiveType::Float64, "42", "42.0")]
#[case(PrimitiveType::Float64, "007.50", "7.5")]
#[case(PrimitiveType::Float64, "1e3", "1000.0")]
#[case(PrimitiveType::Float64, "1E-7", "1e-7")]
#[case(PrimitiveType::Float64, ".5", "0.5")]
#[case(PrimitiveType::Boolean, "TRUE", "true")]
#[case(PrimitiveType::Boolean, "False", "false")]
fn test_format_parse_canonical(
    #[case] ty: PrimitiveType,
    #[case] raw: &str,
    #[case] canonical: &str,
) {
    let value = parse(raw, ty).unwrap();
    assert_eq!(value.primitive_type(), ty);
    assert_eq!(format(&value), canonical);
}

// === Malformed Literals ===

#[rstest]
#[case(PrimitiveType::Integer, "12.3")]
#[case(PrimitiveType::Integer, "abc")]
#[case(PrimitiveType::Integer, "")]
#[case(PrimitiveType::Integer, "1_000")]
#[case(PrimitiveType::Integer, "0x10")]
#[case(PrimitiveType::Float32, "")]
#[case(PrimitiveType::Float32, "1,5")]
#[case(PrimitiveType::Float32, "NaN")]
#[case(PrimitiveType::Float64, "")]
#[case(PrimitiveType::Float64, "3.14.15")]
#[case(PrimitiveType::Float64, "infinity")]
#[case(PrimitiveType::Float64, " 2.0")]
#[case(PrimitiveType::Boolean, "maybe")]
#[case(PrimitiveType::Boolean, "1")]
#[case(PrimitiveType::Boolean, "yes")]
#[case(PrimitiveType::Boolean, "")]
fn test_malformed_literal(#[case] ty: PrimitiveType, #[case] raw: &str) {
    match parse(raw, ty) {
        Err(TypeviewError::Parse { target, raw: r, .. }) => {
            assert_eq!(target, ty.name());
            assert_eq!(r, raw);
        }
        other => panic!("expected parse error for {:?} as {}, got {:?}", raw, ty, other),
    }
}

#[test]
fn test_empty_numeric_reports_empty() {
    for ty in [PrimitiveType::Integer, PrimitiveType::Float32, PrimitiveType::Float64] {
        let err = parse("", ty).unwrap_err();
        assert!(
            matches!(err, TypeviewError::Parse { reason: ParseFailure::Empty, .. }),
            "{ty}: {err:?}"
        );
    }
}

// === Rendering ===

#[test]
fn test_integer_widens_to_floats() {
    let value = parse("42", PrimitiveType::Integer).unwrap();
    assert_eq!(
        render(&value, PrimitiveType::Float64).unwrap(),
        TypedValue::Float64(42.0)
    );
    assert_eq!(
        render(&value, PrimitiveType::Float32).unwrap(),
        TypedValue::Float32(42.0)
    );
    assert_eq!(format(&render(&value, PrimitiveType::Float64).unwrap()), "42.0");
}

#[test]
fn test_float32_widens_numerically() {
    // Widening keeps the f32 value, not the text the user typed
    let value = parse("0.1", PrimitiveType::Float32).unwrap();
    let widened = render(&value, PrimitiveType::Float64).unwrap();
    assert_eq!(widened, TypedValue::Float64(f64::from(0.1f32)));
    assert_eq!(format(&widened), "0.10000000149011612");
}

#[test]
fn test_float64_narrows_to_nearest() {
    let value = parse("2.5", PrimitiveType::Float64).unwrap();
    assert_eq!(
        render(&value, PrimitiveType::Float32).unwrap(),
        TypedValue::Float32(2.5)
    );
}

#[rstest]
#[case(TypedValue::Integer(-12), "-12")]
#[case(TypedValue::Float32(1.25), "1.25")]
#[case(TypedValue::Float64(1e20), "1e20")]
#[case(TypedValue::Boolean(true), "true")]
#[case(TypedValue::Text("as is".into()), "as is")]
fn test_render_to_text(#[case] value: TypedValue, #[case] expected: &str) {
    assert_eq!(
        render(&value, PrimitiveType::Text).unwrap(),
        TypedValue::Text(expected.to_string())
    );
}

#[test]
fn test_text_is_coerced_on_render() {
    let text = parse("17", PrimitiveType::Text).unwrap();
    assert_eq!(
        render(&text, PrimitiveType::Integer).unwrap(),
        TypedValue::Integer(17)
    );

    let text = parse("tRuE", PrimitiveType::Text).unwrap();
    assert_eq!(
        render(&text, PrimitiveType::Boolean).unwrap(),
        TypedValue::Boolean(true)
    );
}

#[test]
fn test_text_not_matching_target_fails_on_render() {
    let text = parse("hello", PrimitiveType::Text).unwrap();
    let err = render(&text, PrimitiveType::Boolean).unwrap_err();
    assert_eq!(
        err,
        TypeviewError::parse("Boolean", "hello", ParseFailure::NotABoolean)
    );
}

#[test]
fn test_render_disallowed_pair() {
    let value = TypedValue::Boolean(true);
    assert_eq!(
        render(&value, PrimitiveType::Integer).unwrap_err(),
        TypeviewError::incompatible("Boolean", "Integer")
    );
    let value = TypedValue::Float64(1.0);
    assert!(render(&value, PrimitiveType::Integer).is_err());
}

#[test]
fn test_value_serialization() {
    let json = serde_json::to_string(&TypedValue::Integer(7)).unwrap();
    assert_eq!(json, r#"{"type":"Integer","value":7}"#);
}

// === Properties ===

proptest! {
    #[test]
    fn prop_integer_format_parse(n in any::<i64>()) {
        let text = format(&TypedValue::Integer(n));
        prop_assert_eq!(parse(&text, PrimitiveType::Integer).unwrap(), TypedValue::Integer(n));
    }

    #[test]
    fn prop_float64_format_parse(x in proptest::num::f64::NORMAL | proptest::num::f64::ZERO) {
        let text = format(&TypedValue::Float64(x));
        prop_assert_eq!(parse(&text, PrimitiveType::Float64).unwrap(), TypedValue::Float64(x));
    }

    #[test]
    fn prop_integer_literal_canonicalizes(n in 0u32..1_000_000, zeros in 0usize..4) {
        let raw = format!("{}{}", "0".repeat(zeros), n);
        prop_assert_eq!(format(&parse(&raw, PrimitiveType::Integer).unwrap()), n.to_string());
    }
}
