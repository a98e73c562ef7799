//! Console collaborators: plain prompts and lines on a terminal

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use colored::Colorize;
use typeview_diagnostics::{Result, TypeviewError};
use typeview_types::PrimitiveType;

use super::Backend;
use crate::io::{Input, Output};

/// Creates console collaborators bound to stdin/stdout
pub struct ConsoleBackend;

impl Backend for ConsoleBackend {
    fn create_input(&self) -> Result<Box<dyn Input>> {
        Ok(Box::new(ConsoleInput::stdio()))
    }

    fn create_output(&self) -> Box<dyn Output> {
        Box::new(ConsoleOutput::new(io::stdout()))
    }
}

/// Prints `prompt: ` and reads one line
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl ConsoleInput<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> Input for ConsoleInput<R, W> {
    /// Blocks until a line is entered. At end of input the answer is empty.
    fn request_text(&mut self, prompt: &str) -> Result<String> {
        write!(self.writer, "{}: ", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            log::debug!("console input closed");
            return Ok(String::new());
        }

        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(trimmed.to_string())
    }
}

/// Prints `Kind: value` lines and colored error lines
pub struct ConsoleOutput<W> {
    writer: W,
}

impl<W: Write> ConsoleOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Output for ConsoleOutput<W> {
    fn display(&mut self, kind: PrimitiveType, text: &str) -> Result<()> {
        writeln!(self.writer, "{}: {}", kind, text)?;
        Ok(())
    }

    fn report(&mut self, error: &TypeviewError) -> Result<()> {
        writeln!(self.writer, "{} {}", "Error:".red().bold(), error.user_message())?;
        if let Some(help) = error.help() {
            writeln!(self.writer, "  {} {}", "help:".cyan(), help)?;
        }
        Ok(())
    }
}
