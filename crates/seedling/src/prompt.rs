//! Interactive project name prompt backed by dialoguer

use dialoguer::Input;
use seedling_projects::{Error, NamePrompt, Result};

use crate::output;

/// Asks on the terminal
pub struct TerminalPrompt;

impl NamePrompt for TerminalPrompt {
    fn ask(&mut self, message: &str, default: &str) -> Result<String> {
        Input::<String>::new()
            .with_prompt(message)
            .default(default.to_string())
            .interact_text()
            .map_err(|e| Error::prompt(e.to_string()))
    }

    fn reject(&mut self, reason: &str) {
        output::error(reason);
    }
}
