//! Reporting entry point for host applications.

use crate::capture::{CapturedFailure, ExceptionReport};
use crate::config::ReporterConfig;
use crate::github::{GitHubClient, IssueTracker, TrackerError};
use crate::issues::{report_exception, FiledIssue};
use crate::runner::RunnerError;
use crate::templates::TemplateRenderer;
use std::path::Path;

/// Files captured failures against the configured repository.
///
/// Built once from a resolved [`ReporterConfig`]; never reads or changes
/// configuration after construction.
pub struct Reporter<T = GitHubClient> {
    tracker: T,
    config: ReporterConfig,
    app_version: String,
    renderer: TemplateRenderer,
}

impl Reporter<GitHubClient> {
    /// Creates a reporter talking to the GitHub API at `api_base_uri`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError`] if the HTTP client cannot be built.
    pub fn new(
        config: ReporterConfig,
        app_version: impl Into<String>,
        api_base_uri: &str,
    ) -> Result<Self, TrackerError> {
        let tracker = GitHubClient::new(config.token(), api_base_uri)?;
        Ok(Self::with_tracker(tracker, config, app_version))
    }

    /// Loads a complete configuration file without prompting.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Config`] if the file is missing or incomplete,
    /// or [`RunnerError::Tracker`] if the HTTP client cannot be built.
    pub fn from_config_file(
        path: &Path,
        app_version: impl Into<String>,
        api_base_uri: &str,
    ) -> Result<Self, RunnerError> {
        let config = ReporterConfig::load(path)?;
        Ok(Self::new(config, app_version, api_base_uri)?)
    }
}

impl<T: IssueTracker> Reporter<T> {
    /// Creates a reporter over any issue tracker.
    pub fn with_tracker(tracker: T, config: ReporterConfig, app_version: impl Into<String>) -> Self {
        Self {
            tracker,
            config,
            app_version: app_version.into(),
            renderer: TemplateRenderer::new(),
        }
    }

    /// Configuration this reporter files against.
    pub fn config(&self) -> &ReporterConfig {
        &self.config
    }

    /// Files `failure` unless an issue with the same fingerprint exists.
    pub async fn report(&self, failure: &CapturedFailure) -> FiledIssue {
        let report = ExceptionReport::from_failure(failure);
        report_exception(
            &self.tracker,
            self.config.repository(),
            &self.app_version,
            &report,
            &self.renderer,
        )
        .await
    }
}
