//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while reading or writing the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read or write a file.
    #[error("Failed to access file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse or serialize JSON content.
    #[error("Failed to parse config file '{path}': {source}")]
    JsonError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Validation error in the configuration contents.
    #[error("Validation error in '{path}': {message}")]
    ValidationError { path: String, message: String },

    /// Config file does not exist.
    #[error("Config file not found: {path}. Please run the setup process.")]
    MissingFile { path: String },

    /// A required field is absent or blank.
    #[error("'{field}' not found in {path}. Please run the setup process.")]
    MissingField { path: String, field: &'static str },

    /// Repository identifier is not in `owner/name` form.
    #[error("Invalid repository '{value}': expected 'owner/name'")]
    InvalidRepository { value: String },
}
