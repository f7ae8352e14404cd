//! GitHub issue creation with fingerprint-based duplicate detection.
//!
//! This module files exception reports as issues. Before creating an issue it
//! searches the bodies of the repository's existing issues for the report's
//! fingerprint, and skips creation when one is found.

mod filed_issue;
mod status;

pub use filed_issue::FiledIssue;
pub use status::IssueStatus;

use crate::capture::ExceptionReport;
use crate::config::RepositoryId;
use crate::github::{IssueSummary, IssueTracker, NewIssue};
use crate::templates::{generate_issue_title, issue_labels, TemplateRenderer};
use tracing::{debug, error, info, info_span, warn, Instrument};

/// Files an exception report unless an issue with its fingerprint exists.
///
/// This function:
/// 1. Checks for an existing issue containing the fingerprint
/// 2. Renders the issue body
/// 3. Creates the issue via the tracker
///
/// Tracker failures never escape: a failed listing counts as "no duplicate"
/// and a failed creation is returned as [`IssueStatus::Failed`].
///
/// # Arguments
///
/// * `tracker` - Issue tracker for the target repository
/// * `repository` - Target repository
/// * `app_version` - Version of the application the failure came from
/// * `report` - Report to file
/// * `renderer` - Template renderer
pub async fn report_exception<T>(
    tracker: &T,
    repository: &RepositoryId,
    app_version: &str,
    report: &ExceptionReport,
    renderer: &TemplateRenderer,
) -> FiledIssue
where
    T: IssueTracker + ?Sized,
{
    let span = info_span!(
        "report_exception",
        repo = %repository,
        fingerprint = %report.fingerprint
    );

    async {
        info!("Reporting exception");

        let title = generate_issue_title(app_version, report);
        let filed = |body: String, status: IssueStatus| FiledIssue {
            repository: repository.clone(),
            fingerprint: report.fingerprint.clone(),
            title: title.clone(),
            body,
            status,
        };

        if let Some(existing) = find_duplicate(tracker, repository, &report.fingerprint).await {
            info!(url = %existing.html_url, "Duplicate issue detected, skipping issue creation");
            return filed(
                String::new(),
                IssueStatus::Duplicate {
                    url: existing.html_url,
                },
            );
        }

        let body = match renderer.render_issue_body(app_version, report) {
            Ok(body) => body,
            Err(e) => {
                error!(error = %e, "Failed to render issue body");
                return filed(
                    String::new(),
                    IssueStatus::Failed {
                        error: e.to_string(),
                    },
                );
            }
        };

        let issue = NewIssue {
            title: title.clone(),
            body: body.clone(),
            labels: issue_labels(app_version),
        };

        match tracker.create_issue(repository, &issue).await {
            Ok(created) => {
                info!(
                    issue_number = created.number,
                    url = %created.html_url,
                    "Bug report successfully created"
                );
                filed(
                    body,
                    IssueStatus::Created {
                        number: created.number,
                        url: created.html_url,
                    },
                )
            }
            Err(e) => {
                error!(error = %e, "Failed to create bug report");
                filed(
                    body,
                    IssueStatus::Failed {
                        error: e.to_string(),
                    },
                )
            }
        }
    }
    .instrument(span)
    .await
}

/// Finds an existing issue whose body contains `fingerprint`.
///
/// Only the first page of issues is searched. If the listing fails for any
/// reason the failure is logged and `None` is returned, so a lost listing
/// leads to a possibly redundant issue rather than a lost report.
pub async fn find_duplicate<T>(
    tracker: &T,
    repository: &RepositoryId,
    fingerprint: &str,
) -> Option<IssueSummary>
where
    T: IssueTracker + ?Sized,
{
    debug!(fingerprint, "Checking for duplicate issue");

    let issues = match tracker.list_issues(repository).await {
        Ok(issues) => issues,
        Err(e) => {
            warn!(error = %e, "Failed to fetch issues, assuming no duplicate");
            return None;
        }
    };

    debug!(count = issues.len(), "Fetched issues");
    issues.into_iter().find(|issue| {
        issue
            .body
            .as_deref()
            .is_some_and(|body| body.contains(fingerprint))
    })
}
