//! GitHub REST API access.
//!
//! The rest of the crate talks to GitHub through two small traits so the
//! reporting and setup stages can run against in-memory fakes in tests:
//! [`IssueTracker`] for listing and creating issues, and [`TokenValidator`]
//! for checking a candidate token before it is saved.

mod client;
mod error;
mod types;

pub use client::{GitHubClient, GitHubTokenValidator};
pub use error::TrackerError;
pub use types::{CreatedIssue, IssueSummary, NewIssue};

use crate::config::RepositoryId;
use async_trait::async_trait;

/// Base URI of the public GitHub REST API.
pub const GITHUB_API_URI: &str = "https://api.github.com";

/// Response header listing the scopes granted to a classic token.
pub const SCOPES_HEADER: &str = "x-oauth-scopes";

/// Issue listing and creation for one repository at a time.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Lists issues of `repository`.
    ///
    /// Only the first page the API returns is fetched.
    async fn list_issues(&self, repository: &RepositoryId)
        -> Result<Vec<IssueSummary>, TrackerError>;

    /// Creates an issue, succeeding only on HTTP 201.
    async fn create_issue(
        &self,
        repository: &RepositoryId,
        issue: &NewIssue,
    ) -> Result<CreatedIssue, TrackerError>;
}

/// Checks a token against the authenticated-user endpoint.
#[async_trait]
pub trait TokenValidator: Send + Sync {
    /// Returns the scopes granted to `token`, or an error if the API rejects it.
    async fn granted_scopes(&self, token: &str) -> Result<Vec<String>, TrackerError>;
}
