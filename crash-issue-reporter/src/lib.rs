#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod capture;
pub mod config;
pub mod github;
pub mod issues;
pub mod reporter;
pub mod runner;
pub mod selftest;
pub mod setup;
pub mod templates;

pub use capture::{
    catch_panic, compute_fingerprint, CapturedFailure, ExceptionReport, FINGERPRINT_LEN,
};
pub use config::{ConfigError, ConfigFile, RepositoryId, ReporterConfig, DEFAULT_CONFIG_FILE};
pub use github::{
    CreatedIssue, GitHubClient, GitHubTokenValidator, IssueSummary, IssueTracker, NewIssue,
    TokenValidator, TrackerError, GITHUB_API_URI,
};
pub use issues::{find_duplicate, report_exception, FiledIssue, IssueStatus};
pub use reporter::Reporter;
pub use runner::{Runner, RunnerConfig, RunnerError};
pub use setup::{
    parse_remote_url, resolve_configuration, validate_token, GitRemote, Prompter, RemoteSource,
    SetupError, TerminalPrompter, REQUIRED_SCOPE,
};
pub use templates::{
    fingerprint_line, generate_issue_title, issue_labels, TemplateError, TemplateRenderer,
};
