//! CLI functionality for the typeview tool
//!
//! This module contains:
//! - Interaction mode selection
//! - Console and dialog collaborator backends
//! - Output formatting
//! - The top-level run and its exit status

pub mod console;
pub mod dialog;
pub mod output;

use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::ValueEnum;
use typeview_diagnostics::Result;

use crate::Session;
use crate::io::{Input, Output};

/// Prompt for choosing the interaction mode at startup
pub const MODE_PROMPT: &str = "Select the input/output mode:\n1. Console\n2. Dialog";

/// Printed when the startup menu answer is not an option
pub const INVALID_MODE_MESSAGE: &str = "Invalid option. Exiting...";

/// Exit status: a value was displayed
pub const EXIT_DISPLAYED: i32 = 0;
/// Exit status: the run was rejected
pub const EXIT_REJECTED: i32 = 1;
/// Exit status: the startup menu answer was not an option
pub const EXIT_INVALID_MODE: i32 = 2;

/// Which collaborator pair drives the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Line-based prompts on the terminal
    Console,
    /// Modal boxes drawn in the terminal
    Dialog,
}

impl Mode {
    /// Parse the startup menu answer
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim().to_lowercase().as_str() {
            "1" | "console" => Some(Self::Console),
            "2" | "dialog" => Some(Self::Dialog),
            _ => None,
        }
    }

    /// Get the backend creating this mode's collaborators
    pub fn backend(self) -> Box<dyn Backend> {
        match self {
            Self::Console => Box::new(console::ConsoleBackend),
            Self::Dialog => Box::new(dialog::DialogBackend),
        }
    }
}

/// Creates a matching input/output collaborator pair
pub trait Backend {
    fn create_input(&self) -> Result<Box<dyn Input>>;
    fn create_output(&self) -> Box<dyn Output>;
}

/// Show the mode menu and read one answer.
///
/// Returns `None` for anything that is not a menu option, end of input
/// included.
pub fn prompt_mode<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> io::Result<Option<Mode>> {
    write!(writer, "{}\n> ", MODE_PROMPT)?;
    writer.flush()?;

    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(Mode::from_choice(&line))
}

/// Pick the mode (asking on `reader` when none was given) and run one
/// session with its backend. Returns the process exit status.
///
/// `reader` is released before the backend starts, so it may be a lock on
/// the same stdin the console backend reads from.
pub fn run<R: BufRead, W: Write>(mode: Option<Mode>, mut reader: R, mut writer: W) -> anyhow::Result<i32> {
    let mode = match mode {
        Some(mode) => mode,
        None => {
            let choice = prompt_mode(&mut reader, &mut writer)
                .context("Failed to read mode selection")?;
            match choice {
                Some(mode) => mode,
                None => {
                    writeln!(writer, "{}", INVALID_MODE_MESSAGE)?;
                    return Ok(EXIT_INVALID_MODE);
                }
            }
        }
    };
    drop(reader);
    log::info!("running in {:?} mode", mode);

    run_backend(mode.backend().as_ref())
        .with_context(|| format!("Failed to start {:?} input", mode))
}

/// Run one session over the backend's collaborators
pub fn run_backend(backend: &dyn Backend) -> Result<i32> {
    let mut input = backend.create_input()?;
    let mut output = backend.create_output();

    let outcome = Session::new(input.as_mut(), output.as_mut()).run();
    match outcome.error() {
        Some(err) => {
            log::debug!("run ended with {}", err.code());
            Ok(EXIT_REJECTED)
        }
        None => Ok(EXIT_DISPLAYED),
    }
}
