//! Typeview: enter a value as one primitive type, view it as another
//!
//! This crate drives a single interaction:
//! - Ask which type the value is declared as
//! - Ask for the raw value and coerce it
//! - Ask which type to view it as and check the pair is permitted
//! - Render and display the value
//!
//! Obtaining text and presenting results are pluggable through the
//! [`Input`](io::Input) and [`Output`](io::Output) traits.
//!
//! # Example
//!
//! ```ignore
//! use typeview::Session;
//!
//! let outcome = Session::new(&mut input, &mut output).run();
//! assert!(outcome.is_done());
//! ```

// Re-export the public APIs of the internal crates
pub use typeview_diagnostics as diagnostics;
pub use typeview_types as types;

pub mod io;
pub mod session;

// Convenience re-exports
pub use io::{Input, Output};
pub use session::{Outcome, Session, State};
pub use typeview_diagnostics::{Result, TypeviewError};
pub use typeview_types::{PrimitiveType, TypedValue};

// CLI module (only available with cli feature)
#[cfg(feature = "cli")]
pub mod cli;
