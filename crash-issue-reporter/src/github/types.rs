//! Request and response payloads for the issues endpoints.

use serde::{Deserialize, Serialize};

/// The fields of a listed issue the duplicate check needs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IssueSummary {
    /// Issue body; `None` when the issue was opened without one.
    #[serde(default)]
    pub body: Option<String>,

    /// Browser URL of the issue.
    pub html_url: String,
}

/// Payload for `POST /repos/{owner}/{repo}/issues`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewIssue {
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
}

/// The parts of a created issue echoed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedIssue {
    /// Issue number.
    #[serde(default)]
    pub number: u64,

    /// Browser URL of the issue.
    #[serde(default)]
    pub html_url: String,
}
