//! Setup error types.

use crate::config::ConfigError;
use crate::github::TrackerError;
use thiserror::Error;

/// Errors that abort first-run setup.
#[derive(Debug, Error)]
pub enum SetupError {
    /// Configuration file could not be read, parsed or written.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Terminal prompt failed.
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// Setup needs a terminal but stdin is not one.
    #[error("Interactive setup requires a terminal")]
    NotInteractive,

    /// No token was entered.
    #[error("No token entered")]
    EmptyToken,

    /// The API rejected the token.
    #[error("Unable to validate token (status {status}). Please check if it's valid.")]
    TokenRejected { status: u16 },

    /// The token lacks a required scope.
    #[error("Token is missing the required '{scope}' scope (granted: {granted})")]
    MissingScope { scope: &'static str, granted: String },

    /// The validation request itself failed.
    #[error("Token validation failed: {0}")]
    Validation(#[source] TrackerError),

    /// Reading the git remote failed.
    #[error("git error: {0}")]
    Git(String),
}
