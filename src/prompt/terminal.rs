//! Terminal prompts rendered with cliclack.

use super::Prompter;
use crate::error::{LicenseError, Result};

/// Interactive prompts on the controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn select<T: Clone + Eq>(&mut self, label: &str, items: &[(T, String)]) -> Result<T> {
        let mut select = cliclack::select(label);
        for (value, item_label) in items {
            select = select.item(value.clone(), item_label, "");
        }
        select.interact().map_err(LicenseError::from_prompt)
    }

    fn input(&mut self, label: &str) -> Result<String> {
        cliclack::input(label)
            .required(false)
            .interact()
            .map_err(LicenseError::from_prompt)
    }
}
