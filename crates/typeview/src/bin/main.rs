//! Typeview command-line interface

use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use typeview::cli::{self, Mode, output};

/// Enter a value as one data type and view it as another
#[derive(Parser)]
#[command(name = "typeview")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Interaction mode; prompts for one when omitted
    #[arg(short, long, value_enum)]
    mode: Option<Mode>,

    /// Color output
    #[arg(long, value_enum, default_value = "auto")]
    color: output::ColorChoice,

    /// Verbose logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    output::setup_colors(cli.color);
    init_logging(cli.verbose);

    let code = match cli::run(cli.mode, io::stdin().lock(), io::stdout()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", output::format_error(&e));
            cli::EXIT_REJECTED
        }
    };
    std::process::exit(code);
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "typeview=debug,typeview_types=debug"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(io::stderr)
        .init();
}
