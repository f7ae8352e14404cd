//! Issue status types.

use serde::Serialize;

/// Outcome of filing one exception report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum IssueStatus {
    /// Issue successfully created.
    Created {
        /// GitHub issue number.
        number: u64,
        /// GitHub issue URL.
        url: String,
    },

    /// An issue with the same fingerprint already exists; nothing was created.
    Duplicate {
        /// URL of the existing issue.
        url: String,
    },

    /// Issue creation failed.
    Failed {
        /// Error message.
        error: String,
    },
}

impl IssueStatus {
    /// Returns the status as a string for display.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created { .. } => "created",
            Self::Duplicate { .. } => "duplicate",
            Self::Failed { .. } => "failed",
        }
    }
}
