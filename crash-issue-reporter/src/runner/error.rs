//! Runner error types.

/// Errors that can occur while running the reporter.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// First-run setup failed.
    #[error(transparent)]
    Setup(#[from] crate::setup::SetupError),

    /// Configuration loading errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Tracker(#[from] crate::github::TrackerError),
}
