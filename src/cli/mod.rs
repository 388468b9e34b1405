//! CLI argument parsing for licensegen.
//!
//! Uses clap derive macros for declarative argument definitions. A bare
//! invocation runs the full interactive flow; every flag only pre-answers
//! or redirects part of it.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Generate a LICENSE file for the current project.
///
/// Reads your name and email from git configuration, lets you confirm or
/// override them, asks which license to use, and writes the filled-in text
/// to `LICENSE` in the current directory.
#[derive(Parser, Debug)]
#[command(name = "licensegen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// File to write the license to.
    #[arg(short, long, default_value = "LICENSE")]
    pub output: PathBuf,

    /// Copyright holder name (skips the name prompt).
    #[arg(long)]
    pub name: Option<String>,

    /// Copyright holder email (skips the email prompt; may be empty).
    #[arg(long)]
    pub email: Option<String>,

    /// License identifier, case-insensitive (skips the license prompt).
    #[arg(short, long)]
    pub license: Option<String>,

    /// Print the supported license identifiers and exit.
    #[arg(long)]
    pub list: bool,

    /// Increase diagnostic output on stderr (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
