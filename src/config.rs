//! Run configuration derived from the command line.

use crate::cli::Cli;
use crate::error::Result;
use crate::license::resolve_identifier;
use std::path::PathBuf;

/// Default output file, relative to the current directory.
pub const DEFAULT_OUTPUT: &str = "LICENSE";

/// Everything a single generation run needs to know up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub output: PathBuf,
    /// Pre-answered holder name; `None` means confirm the git value.
    pub name: Option<String>,
    /// Pre-answered holder email; `None` means confirm the git value.
    pub email: Option<String>,
    /// Pre-selected license in catalog spelling; `None` means ask.
    pub license: Option<&'static str>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            name: None,
            email: None,
            license: None,
        }
    }
}

impl RunOptions {
    /// Build options from parsed arguments.
    ///
    /// An unknown `--license` is rejected here, before git is consulted or
    /// any prompt is shown.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let license = cli.license.as_deref().map(resolve_identifier).transpose()?;
        Ok(Self {
            output: cli.output.clone(),
            name: cli.name.clone(),
            email: cli.email.clone(),
            license,
        })
    }

    /// Whether git needs to be asked for anything.
    pub fn needs_detected_identity(&self) -> bool {
        self.name.is_none() || self.email.is_none()
    }

    /// True when writing to the default `LICENSE` path.
    pub fn is_default_output(&self) -> bool {
        self.output == PathBuf::from(DEFAULT_OUTPUT)
    }
}
