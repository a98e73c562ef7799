//! Terminal output utilities

use std::io::IsTerminal;

use clap::ValueEnum;
use colored::Colorize;

/// Color output options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

/// Set up color output based on user preference
pub fn setup_colors(choice: ColorChoice) {
    match choice {
        ColorChoice::Always => colored::control::set_override(true),
        ColorChoice::Never => colored::control::set_override(false),
        ColorChoice::Auto => {
            // Auto-detect based on terminal
            colored::control::set_override(std::io::stdout().is_terminal());
        }
    }
}

/// Format an error for display
pub fn format_error(error: &anyhow::Error) -> String {
    format!("{} {:#}", "Error:".red().bold(), error)
}
