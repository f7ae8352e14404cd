//! Orchestrates setup and the self-test report.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::config::ReporterConfig;
use crate::github::GitHubTokenValidator;
use crate::issues::FiledIssue;
use crate::reporter::Reporter;
use crate::selftest::simulate_index_out_of_range;
use crate::setup::{resolve_configuration, GitRemote, TerminalPrompter};
use tracing::{info, warn};

/// Runs first-run setup followed by a self-test report.
pub struct Runner {
    config: RunnerConfig,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// Executes setup and the self-test.
    ///
    /// Returns `None` if the self-test produced no failure to report.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if setup fails or the HTTP client cannot be
    /// built. Failures while filing the issue are part of the returned
    /// [`FiledIssue`] instead.
    pub async fn run(&self) -> Result<Option<FiledIssue>, RunnerError> {
        let config = self.setup().await?;
        info!(repo = %config.repository(), "Using repository");
        self.self_test(&config).await
    }

    /// Resolves the configuration, prompting on the terminal where needed.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Setup`] if setup cannot complete.
    pub async fn setup(&self) -> Result<ReporterConfig, RunnerError> {
        let validator = GitHubTokenValidator::new(self.config.api_base_uri());
        let remote = GitRemote::new(self.config.repo_dir());
        let mut prompter = TerminalPrompter::new();

        Ok(resolve_configuration(
            self.config.config_path(),
            &validator,
            &mut prompter,
            &remote,
        )
        .await?)
    }

    /// Triggers a sample failure and reports it.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Tracker`] if the HTTP client cannot be built.
    pub async fn self_test(&self, config: &ReporterConfig) -> Result<Option<FiledIssue>, RunnerError> {
        let reporter = Reporter::new(
            config.clone(),
            self.config.app_version(),
            self.config.api_base_uri(),
        )?;

        let Some(failure) = simulate_index_out_of_range() else {
            warn!("Self-test did not produce a failure");
            return Ok(None);
        };

        info!(message = %failure.message, "Captured sample failure");
        Ok(Some(reporter.report(&failure).await))
    }
}
