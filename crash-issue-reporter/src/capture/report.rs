//! Exception report built from a captured failure.

use super::{compute_fingerprint, CapturedFailure};

/// An exception report ready to be filed.
///
/// Only lives in memory; its durable form is the issue body it is rendered into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExceptionReport {
    /// `<origin> - <kind> - <message>`.
    pub title: String,

    /// Human-readable description of the failure.
    pub body: String,

    /// Hex digest of [`stack_trace`](Self::stack_trace).
    pub fingerprint: String,

    /// Verbatim stack trace.
    pub stack_trace: String,
}

impl ExceptionReport {
    #[must_use]
    pub fn from_failure(failure: &CapturedFailure) -> Self {
        Self {
            title: format!(
                "{} - {} - {}",
                failure.origin, failure.kind, failure.message
            ),
            body: format!(
                "An exception occurred:\n\n- **Type:** {}\n- **Message:** {}",
                failure.kind, failure.message
            ),
            fingerprint: compute_fingerprint(&failure.stack_trace),
            stack_trace: failure.stack_trace.clone(),
        }
    }
}
