//! Typeview type system
//!
//! This crate defines the value model behind typeview:
//! - The five primitive types and their names
//! - Typed values produced from raw text
//! - Parsing, formatting and rendering between types
//! - The compatibility matrix deciding which renderings are permitted

pub mod coercion;
pub mod compatibility;
pub mod primitive_type;
pub mod value;

pub use coercion::{format, parse, render};
pub use compatibility::CompatibilityMatrix;
pub use primitive_type::PrimitiveType;
pub use value::TypedValue;
