//! octocrab-backed implementation of the GitHub seams.

use super::{
    CreatedIssue, IssueSummary, IssueTracker, NewIssue, TokenValidator, TrackerError,
    SCOPES_HEADER,
};
use crate::config::RepositoryId;
use async_trait::async_trait;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use tracing::debug;

/// GitHub REST client authenticated with a personal access token.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    octocrab: Octocrab,
}

impl GitHubClient {
    /// Builds a client for the API at `base_uri` (normally [`super::GITHUB_API_URI`]).
    ///
    /// Every request is sent exactly once; octocrab's retry layer is disabled.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError`] if the base URI is invalid or the client cannot be built.
    pub fn new(token: &str, base_uri: &str) -> Result<Self, TrackerError> {
        let octocrab = Octocrab::builder()
            .add_retry_config(RetryConfig::None)
            .base_uri(base_uri)?
            .personal_token(token.to_string())
            .build()?;
        Ok(Self { octocrab })
    }

    /// Fetches the scopes granted to the client's token from `GET /user`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::UnexpectedStatus`] for any status other than 200.
    pub async fn granted_scopes(&self) -> Result<Vec<String>, TrackerError> {
        let response = self.octocrab._get("/user").await?;
        let status = response.status();
        let scopes = response
            .headers()
            .get(SCOPES_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(parse_scopes)
            .unwrap_or_default();

        if status.as_u16() != 200 {
            let body = self.octocrab.body_to_string(response).await?;
            return Err(TrackerError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        debug!(?scopes, "Fetched token scopes");
        Ok(scopes)
    }
}

#[async_trait]
impl IssueTracker for GitHubClient {
    async fn list_issues(
        &self,
        repository: &RepositoryId,
    ) -> Result<Vec<IssueSummary>, TrackerError> {
        let response = self.octocrab._get(issues_route(repository)).await?;
        let status = response.status();
        let body = self.octocrab.body_to_string(response).await?;

        if !status.is_success() {
            return Err(TrackerError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    async fn create_issue(
        &self,
        repository: &RepositoryId,
        issue: &NewIssue,
    ) -> Result<CreatedIssue, TrackerError> {
        let response = self
            .octocrab
            ._post(issues_route(repository), Some(issue))
            .await?;
        let status = response.status();
        let body = self.octocrab.body_to_string(response).await?;

        if status.as_u16() != 201 {
            return Err(TrackerError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// Validates candidate tokens against the API at a fixed base URI.
#[derive(Debug, Clone)]
pub struct GitHubTokenValidator {
    base_uri: String,
}

impl GitHubTokenValidator {
    pub fn new(base_uri: impl Into<String>) -> Self {
        Self {
            base_uri: base_uri.into(),
        }
    }
}

#[async_trait]
impl TokenValidator for GitHubTokenValidator {
    async fn granted_scopes(&self, token: &str) -> Result<Vec<String>, TrackerError> {
        GitHubClient::new(token, &self.base_uri)?
            .granted_scopes()
            .await
    }
}

/// Route of the issues collection for a repository.
fn issues_route(repository: &RepositoryId) -> String {
    format!("/repos/{}/{}/issues", repository.owner(), repository.name())
}

/// Splits an `x-oauth-scopes` header value into individual scopes.
pub(crate) fn parse_scopes(header: &str) -> Vec<String> {
    header
        .split(',')
        .map(str::trim)
        .filter(|scope| !scope.is_empty())
        .map(str::to_string)
        .collect()
}
