//! Runner configuration.

use crate::config::DEFAULT_CONFIG_FILE;
use crate::github::GITHUB_API_URI;
use std::path::{Path, PathBuf};

/// Configuration for a setup and self-test run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Path to the reporter configuration file.
    config_path: PathBuf,
    /// Application version stamped on filed issues.
    app_version: String,
    /// Base URI of the GitHub REST API.
    api_base_uri: String,
    /// Directory whose git `origin` remote is used to detect the repository.
    repo_dir: PathBuf,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(config_path: PathBuf, app_version: impl Into<String>) -> Self {
        Self {
            config_path,
            app_version: app_version.into(),
            api_base_uri: GITHUB_API_URI.to_string(),
            repo_dir: PathBuf::from("."),
        }
    }

    /// Sets a custom API base URI (e.g. for GitHub Enterprise).
    pub fn with_api_base_uri(mut self, api_base_uri: impl Into<String>) -> Self {
        self.api_base_uri = api_base_uri.into();
        self
    }

    /// Sets the directory used for git remote detection.
    pub fn with_repo_dir(mut self, repo_dir: PathBuf) -> Self {
        self.repo_dir = repo_dir;
        self
    }

    /// Returns the reporter configuration file path.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Returns the application version.
    pub fn app_version(&self) -> &str {
        &self.app_version
    }

    /// Returns the API base URI.
    pub fn api_base_uri(&self) -> &str {
        &self.api_base_uri
    }

    /// Returns the directory used for git remote detection.
    pub fn repo_dir(&self) -> &Path {
        &self.repo_dir
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self::new(PathBuf::from(DEFAULT_CONFIG_FILE), env!("CARGO_PKG_VERSION"))
    }
}
