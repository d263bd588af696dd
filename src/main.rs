//! Tally CLI

use std::{io, process::ExitCode};

use clap::Parser;
use tally::{config, logging};
use tracing::warn;

use crate::cli::Cli;

mod cli;

#[expect(clippy::print_stderr, reason = "errors are reported on stderr.")]
fn main() -> ExitCode {
    let dotenv = config::load_dotenv();

    let cli = Cli::parse();

    if let Err(error) = logging::init(&cli.config) {
        eprintln!("{error}");

        return ExitCode::FAILURE;
    }

    if let Err(error) = dotenv {
        warn!(%error, "failed to load .env file");
    }

    let mut out = io::stdout().lock();

    if let Err(error) = cli.run(&mut out) {
        eprintln!("{error:#}");

        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
