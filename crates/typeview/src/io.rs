//! Collaborator capabilities consumed by a [`Session`](crate::Session)

use typeview_diagnostics::{Result, TypeviewError};
use typeview_types::PrimitiveType;

/// Source of raw text.
///
/// Implementations may retry internally until the user supplies some text,
/// or return an empty string when the user cancels. The session treats the
/// returned text literally either way.
pub trait Input {
    /// Show `prompt` and return the text the user supplied
    fn request_text(&mut self, prompt: &str) -> Result<String>;
}

/// Destination for rendered values and error reports
pub trait Output {
    /// Present a value labeled with its type, as `Kind: value`
    fn display(&mut self, kind: PrimitiveType, text: &str) -> Result<()>;

    /// Present the error that ended the run
    fn report(&mut self, error: &TypeviewError) -> Result<()>;
}
