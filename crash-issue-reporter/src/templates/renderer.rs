//! Template renderer.

use crate::capture::ExceptionReport;
use handlebars::{no_escape, Handlebars};
use serde_json::{json, Value};

/// Body layout of every filed issue.
///
/// The `**Exception Hash:**` line is what later runs search for, so its
/// format must not change.
pub const ISSUE_BODY_TEMPLATE: &str = "**Version:** {{version}}

{{description}}

**Exception Hash:** `{{fingerprint}}`

**Stack Trace:**
```
{{stack_trace}}
```";

/// Creates a configured Handlebars registry.
///
/// The registry is configured with:
/// - No HTML escaping (for markdown output)
/// - Strict mode (catches missing variables)
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();

    // Disable HTML escaping for markdown output
    hbs.register_escape_fn(no_escape);

    // Enable strict mode to catch missing variables
    hbs.set_strict_mode(true);

    hbs
}

/// Template renderer for issue bodies.
pub struct TemplateRenderer {
    handlebars: Handlebars<'static>,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    /// Creates a new template renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlebars: create_handlebars_registry(),
        }
    }

    /// Renders the issue body for a report.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_issue_body(
        &self,
        app_version: &str,
        report: &ExceptionReport,
    ) -> Result<String, super::TemplateError> {
        let data = json!({
            "version": app_version,
            "description": report.body,
            "fingerprint": report.fingerprint,
            "stack_trace": report.stack_trace
        });

        self.render_template(ISSUE_BODY_TEMPLATE, &data)
    }

    fn render_template(&self, template: &str, data: &Value) -> Result<String, super::TemplateError> {
        Ok(self.handlebars.render_template(template, data)?)
    }
}
