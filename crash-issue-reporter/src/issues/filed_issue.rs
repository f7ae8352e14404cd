//! Filed issue information.

/// An exception report as submitted to the tracker.
#[derive(Debug, Clone)]
pub struct FiledIssue {
    /// Target repository.
    pub repository: crate::config::RepositoryId,

    /// Fingerprint of the reported stack trace.
    pub fingerprint: String,

    /// Issue title.
    pub title: String,

    /// Rendered issue body. Empty when a duplicate was found.
    pub body: String,

    /// Filing status.
    pub status: super::IssueStatus,
}
