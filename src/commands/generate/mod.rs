//! Implementation of the default (interactive) generation flow.
//!
//! # What a run does
//!
//! 1. Fetches `user.name` / `user.email` from git (aborts on failure)
//! 2. Confirms the name, or switches to free-text entry
//! 3. Confirms the email, or switches to free-text entry
//! 4. Asks for a license from the bundled catalog
//! 5. Renders the template and writes it atomically to the output path
//!
//! Any error, including the user cancelling a prompt, short-circuits the
//! remaining steps. Nothing is written unless every step succeeded.


use crate::config::RunOptions;
use crate::error::Result;
use crate::fs::atomic_write_file;
use crate::identity::{Identity, IdentitySource};
use crate::license::{load_template, render};
use crate::prompt::{EMAIL_PROMPT, NAME_PROMPT, Prompter, confirm_or_enter, select_license};
use std::path::PathBuf;

/// What ended up in the written file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub path: PathBuf,
    pub license: &'static str,
    pub holder: Identity,
}

/// Run the generation flow with explicit collaborators.
pub fn generate<S, P>(
    options: &RunOptions,
    source: &S,
    prompter: &mut P,
    year: i32,
) -> Result<Generated>
where
    S: IdentitySource,
    P: Prompter,
{
    let detected = source.fetch_identity().inspect_err(|e| {
        tracing::debug!(error = %e, "identity lookup failed");
    })?;

    let name = match &options.name {
        Some(name) => name.clone(),
        None => confirm_or_enter(prompter, &NAME_PROMPT, &detected.name)?,
    };

    let email = match &options.email {
        Some(email) => email.clone(),
        None => confirm_or_enter(prompter, &EMAIL_PROMPT, &detected.email)?,
    };

    let license = match options.license {
        Some(license) => license,
        None => select_license(prompter)?,
    };

    // The catalog is read from the store, so a miss here is a packaging bug.
    let template = load_template(license)?;
    let text = render(template, year, &name, &email);

    atomic_write_file(&options.output, &text)?;

    Ok(Generated {
        path: options.output.clone(),
        license,
        holder: Identity { name, email },
    })
}
