//! Interaction layer: select and free-text prompts.
//!
//! Cancellation is decided here, at the boundary: implementations return
//! [`LicenseError::Interrupted`](crate::error::LicenseError::Interrupted) when
//! the user backs out, and callers never inspect prompt text to find out.

mod terminal;

pub use terminal::TerminalPrompter;

use crate::error::Result;

/// A source of answers to the questions asked during a run.
pub trait Prompter {
    /// Single choice from an ordered list of `(value, label)` items.
    fn select<T: Clone + Eq>(&mut self, label: &str, items: &[(T, String)]) -> Result<T>;

    /// Unconstrained free text. The empty string is a valid answer.
    fn input(&mut self, label: &str) -> Result<String>;
}

/// Answer to "is this detected value right?".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityChoice {
    UseDetected(String),
    EnterManually,
}

/// Labels for confirming one identity field.
#[derive(Debug, Clone, Copy)]
pub struct FieldPrompt {
    pub select_label: &'static str,
    pub escape_label: &'static str,
    pub input_label: &'static str,
}

pub const NAME_PROMPT: FieldPrompt = FieldPrompt {
    select_label: "Select your name",
    escape_label: "No, I will input my name.",
    input_label: "What is your name",
};

pub const EMAIL_PROMPT: FieldPrompt = FieldPrompt {
    select_label: "Select your email",
    escape_label: "No, I will input my email.",
    input_label: "What is your email",
};

/// Offer the detected value or an escape to manual entry.
///
/// Choosing the escape returns exactly what the user typed, never `detected`.
pub fn confirm_or_enter<P: Prompter>(
    prompter: &mut P,
    field: &FieldPrompt,
    detected: &str,
) -> Result<String> {
    let items = [
        (
            IdentityChoice::UseDetected(detected.to_string()),
            detected.to_string(),
        ),
        (IdentityChoice::EnterManually, field.escape_label.to_string()),
    ];

    match prompter.select(field.select_label, &items)? {
        IdentityChoice::UseDetected(value) => Ok(value),
        IdentityChoice::EnterManually => prompter.input(field.input_label),
    }
}

/// Pick a license from the bundled catalog.
pub fn select_license<P: Prompter>(prompter: &mut P) -> Result<&'static str> {
    let items: Vec<(&'static str, String)> = crate::license::catalog()
        .map(|id| (id, id.to_string()))
        .collect();
    prompter.select("Select License", &items)
}
