//! Error types for the licensegen CLI.
//!
//! Uses thiserror for derive macros. Every variant terminates the run after a
//! single diagnostic; nothing is retried.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for licensegen operations.
#[derive(Error, Debug)]
pub enum LicenseError {
    /// `user.name` or `user.email` could not be read from git.
    #[error("failed to get git config: {0}")]
    ConfigUnavailable(String),

    /// The user cancelled a prompt.
    #[error("operation was interrupted by the user")]
    Interrupted,

    /// No bundled template matches the requested identifier.
    #[error("no bundled license template for '{0}'")]
    TemplateNotFound(String),

    /// A license identifier passed on the command line is not in the catalog.
    #[error("unknown license '{id}'. Supported licenses: {supported}")]
    UnknownLicense { id: String, supported: String },

    /// The terminal prompt failed for a reason other than user cancellation.
    #[error("prompt failed: {0}")]
    Prompt(String),

    /// The rendered license could not be written.
    #[error("failed to write license to '{}': {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LicenseError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LicenseError::ConfigUnavailable(_) => exit_codes::FAILURE,
            LicenseError::Interrupted => exit_codes::INTERRUPTED,
            LicenseError::TemplateNotFound(_) => exit_codes::INTERNAL_ERROR,
            LicenseError::UnknownLicense { .. } => exit_codes::FAILURE,
            LicenseError::Prompt(_) => exit_codes::FAILURE,
            LicenseError::WriteFailure { .. } => exit_codes::FAILURE,
        }
    }

    /// Map a prompt I/O error, recognising user cancellation.
    ///
    /// The terminal widgets report Ctrl-C / Esc as `ErrorKind::Interrupted`;
    /// that is the only case that becomes [`LicenseError::Interrupted`].
    pub fn from_prompt(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::Interrupted {
            LicenseError::Interrupted
        } else {
            LicenseError::Prompt(err.to_string())
        }
    }
}

/// Result type alias for licensegen operations.
pub type Result<T> = std::result::Result<T, LicenseError>;
