//! Issue title, label and body composition.

mod error;
mod renderer;

pub use error::TemplateError;
pub use renderer::{create_handlebars_registry, TemplateRenderer, ISSUE_BODY_TEMPLATE};

use crate::capture::ExceptionReport;

/// Label prefix carrying the application version.
pub const VERSION_LABEL_PREFIX: &str = "version:";

/// Generates the issue title for a report.
///
/// Format: "[{app_version}] {report title}"
#[must_use]
pub fn generate_issue_title(app_version: &str, report: &ExceptionReport) -> String {
    format!("[{app_version}] {}", report.title)
}

/// Labels attached to every filed issue.
#[must_use]
pub fn issue_labels(app_version: &str) -> Vec<String> {
    vec![
        "bug".to_string(),
        "automatic".to_string(),
        "Automatic Bug Report".to_string(),
        format!("{VERSION_LABEL_PREFIX}{app_version}"),
    ]
}

/// The fingerprint line embedded in every issue body.
#[must_use]
pub fn fingerprint_line(fingerprint: &str) -> String {
    format!("**Exception Hash:** `{fingerprint}`")
}
