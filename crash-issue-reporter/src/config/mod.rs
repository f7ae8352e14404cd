//! Configuration loading and persistence.
//!
//! The reporter needs two values: a GitHub personal access token and the
//! `owner/name` of the repository issues are filed against. Both live in a
//! JSON file (`config.json` by default) that the setup stage creates and
//! every later run reads.

mod error;
mod file;
mod repository;

pub use error::ConfigError;
pub use file::{ConfigFile, DEFAULT_CONFIG_FILE, GITHUB_TOKEN_KEY, REPO_NAME_KEY};
pub use repository::RepositoryId;

use std::fmt;
use std::path::Path;

/// Resolved configuration, built once and passed by reference to every API call.
#[derive(Clone)]
pub struct ReporterConfig {
    token: String,
    repository: RepositoryId,
}

impl ReporterConfig {
    /// Creates a configuration from an already validated token and repository.
    pub fn new(token: impl Into<String>, repository: RepositoryId) -> Self {
        Self {
            token: token.into(),
            repository,
        }
    }

    /// Loads the configuration without any interactive setup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file is missing, unreadable, or lacks a field.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        ConfigFile::load(path)?.to_reporter_config()
    }

    /// GitHub personal access token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Target repository.
    pub fn repository(&self) -> &RepositoryId {
        &self.repository
    }
}

impl fmt::Debug for ReporterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReporterConfig")
            .field("token", &"<redacted>")
            .field("repository", &self.repository)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_token() {
        let config = ReporterConfig::new("ghp_secret", "acme/widgets".parse().unwrap());
        let rendered = format!("{config:?}");

        assert!(!rendered.contains("ghp_secret"));
        assert!(rendered.contains("widgets"));
    }
}
