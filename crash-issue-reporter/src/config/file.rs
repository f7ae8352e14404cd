//! On-disk JSON configuration file.

use super::{ConfigError, RepositoryId, ReporterConfig};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default location of the configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Key holding the GitHub personal access token.
pub const GITHUB_TOKEN_KEY: &str = "github_token";

/// Key holding the `owner/name` repository identifier.
pub const REPO_NAME_KEY: &str = "repo_name";

/// The configuration file as a JSON object.
///
/// Keys this crate does not know about are kept as-is and written back
/// unchanged by [`ConfigFile::save`].
#[derive(Debug, Clone)]
pub struct ConfigFile {
    path: PathBuf,
    values: Map<String, Value>,
}

impl ConfigFile {
    /// Opens the configuration file, starting from an empty object if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file exists but cannot be read or is not a JSON object.
    pub fn open(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "Config file not found, starting empty");
            return Ok(Self {
                path: path.to_path_buf(),
                values: Map::new(),
            });
        }

        Self::load(path)
    }

    /// Loads an existing configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingFile`] if the file does not exist, or another
    /// [`ConfigError`] if it cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::MissingFile {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        let value: Value = serde_json::from_str(&content).map_err(|e| ConfigError::JsonError {
            path: path.display().to_string(),
            source: e,
        })?;

        let Value::Object(values) = value else {
            return Err(ConfigError::ValidationError {
                path: path.display().to_string(),
                message: "expected a JSON object at the top level".to_string(),
            });
        };

        debug!(path = %path.display(), keys = values.len(), "Loaded config file");
        Ok(Self {
            path: path.to_path_buf(),
            values,
        })
    }

    /// Path this file is read from and written to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored token, if present and not blank.
    pub fn github_token(&self) -> Option<&str> {
        self.non_blank(GITHUB_TOKEN_KEY)
    }

    /// The stored repository identifier, if present and not blank.
    pub fn repo_name(&self) -> Option<&str> {
        self.non_blank(REPO_NAME_KEY)
    }

    pub fn set_github_token(&mut self, token: &str) {
        self.values
            .insert(GITHUB_TOKEN_KEY.to_string(), Value::String(token.to_string()));
    }

    pub fn set_repo_name(&mut self, repository: &RepositoryId) {
        self.values
            .insert(REPO_NAME_KEY.to_string(), Value::String(repository.to_string()));
    }

    /// Writes the full object back to disk.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if serialization or the write fails.
    pub fn save(&self) -> Result<(), ConfigError> {
        let content =
            serde_json::to_string_pretty(&self.values).map_err(|e| ConfigError::JsonError {
                path: self.path.display().to_string(),
                source: e,
            })?;

        std::fs::write(&self.path, content).map_err(|e| ConfigError::IoError {
            path: self.path.display().to_string(),
            source: e,
        })?;

        debug!(path = %self.path.display(), "Saved config file");
        Ok(())
    }

    /// Builds a [`ReporterConfig`] from the stored fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] if the token or repository is absent,
    /// or [`ConfigError::InvalidRepository`] if the repository is malformed.
    pub fn to_reporter_config(&self) -> Result<ReporterConfig, ConfigError> {
        let token = self.github_token().ok_or_else(|| ConfigError::MissingField {
            path: self.path.display().to_string(),
            field: GITHUB_TOKEN_KEY,
        })?;
        let repository = self
            .repo_name()
            .ok_or_else(|| ConfigError::MissingField {
                path: self.path.display().to_string(),
                field: REPO_NAME_KEY,
            })?
            .parse()?;

        Ok(ReporterConfig::new(token, repository))
    }

    fn non_blank(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}
