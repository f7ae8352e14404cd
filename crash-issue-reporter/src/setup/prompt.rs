//! Interactive prompts for first-run setup.

use super::{SetupError, REQUIRED_SCOPE};
use crate::config::RepositoryId;
use dialoguer::{Confirm, Input, Password};
use std::io::IsTerminal;

/// Questions setup may need to ask the operator.
pub trait Prompter {
    /// Asks for a GitHub personal access token.
    fn token(&mut self) -> Result<String, SetupError>;

    /// Asks whether a detected repository is the right one.
    fn confirm_repository(&mut self, detected: &RepositoryId) -> Result<bool, SetupError>;

    /// Asks for the repository in `owner/name` form.
    fn repository(&mut self) -> Result<String, SetupError>;
}

/// Prompts on the controlling terminal. Requires a TTY.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }

    fn ensure_terminal() -> Result<(), SetupError> {
        if std::io::stdin().is_terminal() {
            Ok(())
        } else {
            Err(SetupError::NotInteractive)
        }
    }
}

impl Prompter for TerminalPrompter {
    fn token(&mut self) -> Result<String, SetupError> {
        Self::ensure_terminal()?;

        println!(
            "You need to provide a Personal Access Token (PAT) from GitHub to use this tool.\n\
             1. Go to https://github.com/settings/tokens\n\
             2. Generate a new token with the following required access:\n   \
                - {REQUIRED_SCOPE}\n\
             3. Copy the token and paste it below."
        );

        Ok(Password::new()
            .with_prompt("Enter your GitHub Personal Access Token (PAT)")
            .allow_empty_password(true)
            .interact()?)
    }

    fn confirm_repository(&mut self, detected: &RepositoryId) -> Result<bool, SetupError> {
        Self::ensure_terminal()?;

        Ok(Confirm::new()
            .with_prompt(format!("Detected repository '{detected}'. Use it?"))
            .default(true)
            .interact()?)
    }

    fn repository(&mut self) -> Result<String, SetupError> {
        Self::ensure_terminal()?;

        Ok(Input::<String>::new()
            .with_prompt("GitHub repository (owner/name)")
            .validate_with(|input: &String| -> Result<(), String> {
                input
                    .parse::<RepositoryId>()
                    .map(|_| ())
                    .map_err(|e| e.to_string())
            })
            .interact_text()?)
    }
}
