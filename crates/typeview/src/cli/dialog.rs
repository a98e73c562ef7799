//! Dialog collaborators: modal boxes drawn on the terminal
//!
//! Every prompt and message is shown as a framed box. Input is read with a
//! line editor; cancelling with Ctrl-C or Ctrl-D answers with an empty
//! string.

use std::io::{self, Stdout, Write};

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tabled::builder::Builder;
use tabled::settings::{Panel, Style};
use typeview_diagnostics::{Result, TV0401, TypeviewError};
use typeview_types::PrimitiveType;

use super::Backend;
use crate::io::{Input, Output};

/// Creates dialog collaborators on the controlling terminal
pub struct DialogBackend;

impl Backend for DialogBackend {
    fn create_input(&self) -> Result<Box<dyn Input>> {
        Ok(Box::new(DialogInput::new()?))
    }

    fn create_output(&self) -> Box<dyn Output> {
        Box::new(DialogOutput::new(io::stdout()))
    }
}

/// Draw `body` in a box with `title` as its header row
pub fn frame(title: &str, body: &str) -> String {
    let mut builder = Builder::default();
    builder.push_record([body]);

    let mut table = builder.build();
    table.with(Style::modern()).with(Panel::header(title));
    table.to_string()
}

/// Shows each prompt as a dialog box and reads the answer
pub struct DialogInput {
    editor: DefaultEditor,
    writer: Stdout,
}

impl DialogInput {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().map_err(readline_error)?;
        Ok(Self {
            editor,
            writer: io::stdout(),
        })
    }
}

impl Input for DialogInput {
    fn request_text(&mut self, prompt: &str) -> Result<String> {
        writeln!(self.writer, "{}", frame("Input", prompt))?;
        self.writer.flush()?;

        answer(self.editor.readline("> "))
    }
}

/// Map a line editor result to the dialog answer; cancelling gives ""
fn answer(line: rustyline::Result<String>) -> Result<String> {
    match line {
        Ok(line) => Ok(line),
        Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
            log::debug!("dialog cancelled");
            Ok(String::new())
        }
        Err(err) => Err(readline_error(err)),
    }
}

fn readline_error(err: ReadlineError) -> TypeviewError {
    match err {
        ReadlineError::Io(io_err) => io_err.into(),
        other => TypeviewError::system(TV0401, other.to_string()),
    }
}

/// Shows values and errors as message boxes
pub struct DialogOutput<W> {
    writer: W,
}

impl<W: Write> DialogOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Output for DialogOutput<W> {
    fn display(&mut self, kind: PrimitiveType, text: &str) -> Result<()> {
        let body = format!("{}: {}", kind, text);
        writeln!(self.writer, "{}", frame(kind.name(), &body))?;
        Ok(())
    }

    fn report(&mut self, error: &TypeviewError) -> Result<()> {
        let mut body = error.user_message();
        if let Some(help) = error.help() {
            body.push('\n');
            body.push_str(help);
        }
        writeln!(self.writer, "{}", frame(&format!("Error {}", error.code()), &body))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use typeview_diagnostics::TypeRole;

    #[test]
    fn test_frame_draws_box() {
        let drawn = frame("Input", "Enter the value");
        let first = drawn.lines().next().unwrap();
        assert!(first.starts_with('┌'));
        assert!(drawn.contains("Input"));
        assert!(drawn.contains("Enter the value"));
        assert!(drawn.lines().last().unwrap().starts_with('└'));
    }

    #[test]
    fn test_answer_cancel_is_empty() {
        assert_eq!(answer(Ok("42".to_string())).unwrap(), "42");
        assert_eq!(answer(Err(ReadlineError::Interrupted)).unwrap(), "");
        assert_eq!(answer(Err(ReadlineError::Eof)).unwrap(), "");
    }

    #[test]
    fn test_answer_io_failure() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "tty gone");
        let err = answer(Err(ReadlineError::Io(io))).unwrap_err();
        assert_eq!(err.code(), TV0401);
    }

    #[test]
    fn test_display_box() {
        let mut output = DialogOutput::new(Vec::new());
        output.display(PrimitiveType::Boolean, "true").unwrap();
        let drawn = String::from_utf8(output.into_inner()).unwrap();
        assert!(drawn.contains("Boolean: true"));
    }

    #[test]
    fn test_report_box() {
        let mut output = DialogOutput::new(Vec::new());
        output
            .report(&TypeviewError::invalid_type(TypeRole::Source, "integerr"))
            .unwrap();
        let drawn = String::from_utf8(output.into_inner()).unwrap();
        assert!(drawn.contains("Error TV0100"));
        assert!(drawn.contains("Invalid source type 'integerr'"));
        assert!(drawn.contains("Valid types"));
    }
}
