//! licensegen: generate a LICENSE file from your git identity.
//!
//! This is the main entry point for the `licensegen` CLI. It parses
//! arguments, sets up logging, runs the requested flow, and turns errors
//! into a single message plus an exit code.

mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod git;
pub mod identity;
pub mod license;
mod logging;
pub mod prompt;

#[cfg(test)]
mod test_support;

use cli::Cli;
use error::LicenseError;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    // The terminal layer raises SIGINT on Ctrl-C; with a handler installed the
    // keystroke comes back from the prompt as an interruption instead.
    if let Err(e) = ctrlc::set_handler(|| {}) {
        tracing::debug!(error = %e, "could not install Ctrl-C handler");
    }

    match commands::dispatch(&cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            tracing::debug!(error = ?err, "run failed");
            eprintln!("{}", failure_message(&err));
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// The single line printed to stderr when a run fails.
fn failure_message(err: &LicenseError) -> String {
    format!("Error: {}", err)
}
