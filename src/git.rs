//! Git command runner for licensegen.
//!
//! Wraps `git` invocations with captured stdout/stderr. The only thing
//! licensegen asks git for is configuration, so every failure here surfaces
//! as [`LicenseError::ConfigUnavailable`].

use crate::error::{LicenseError, Result};
use crate::identity::{Identity, IdentitySource};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }
}

/// Run `program` (normally `git`) with the specified working directory.
///
/// # Returns
///
/// * `Ok(GitOutput)` - On successful execution (exit code 0)
/// * `Err(LicenseError::ConfigUnavailable)` - If the program cannot be spawned or exits non-zero
pub fn run_git(program: &str, cwd: &Path, args: &[&str]) -> Result<GitOutput> {
    tracing::debug!(program, cwd = %cwd.display(), ?args, "running git");

    let output = Command::new(program)
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            LicenseError::ConfigUnavailable(format!(
                "failed to execute {} {}: {} (is git installed?)",
                program,
                args.join(" "),
                e
            ))
        })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(git_output)
    } else {
        let detail = match output.status.code() {
            Some(code) => format!("exit code {}", code),
            None => "terminated by signal".to_string(),
        };
        let message = if git_output.stderr.is_empty() {
            String::new()
        } else {
            format!(": {}", git_output.stderr)
        };
        Err(LicenseError::ConfigUnavailable(format!(
            "{} {} failed ({}){}",
            program,
            args.join(" "),
            detail,
            message
        )))
    }
}

/// Reads `user.name` and `user.email` via `git config --get`.
#[derive(Debug, Clone)]
pub struct GitIdentity {
    cwd: PathBuf,
    program: String,
}

impl GitIdentity {
    /// Look up the identity as seen from `cwd` (local repo config wins over global).
    pub fn new<P: Into<PathBuf>>(cwd: P) -> Self {
        Self {
            cwd: cwd.into(),
            program: "git".to_string(),
        }
    }

    /// Use a different executable in place of `git`.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Read a single configuration key.
    pub fn get(&self, key: &str) -> Result<String> {
        let output = run_git(&self.program, &self.cwd, &["config", "--get", key])?;
        Ok(output.stdout)
    }
}

impl IdentitySource for GitIdentity {
    fn fetch_identity(&self) -> Result<Identity> {
        let name = self.get("user.name")?;
        let email = self.get("user.email")?;
        tracing::debug!(%name, %email, "git identity resolved");
        Ok(Identity { name, email })
    }
}
