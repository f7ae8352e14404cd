//! Captured failure details.

use super::panic_hook::PanicDetails;
use super::short_type_name;
use std::any::Any;
use std::backtrace::Backtrace;
use std::fmt::Write;

/// Kind recorded for failures caught as panics.
pub const PANIC_KIND: &str = "panic";

/// A failure intercepted from executing code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedFailure {
    /// Name of the function the failure was raised from.
    pub origin: String,

    /// Failure kind (`panic`, or the error type's name).
    pub kind: String,

    /// Human-readable failure message.
    pub message: String,

    /// Fully rendered stack trace.
    pub stack_trace: String,
}

impl CapturedFailure {
    /// Builds a failure from an error propagated through `Result`.
    ///
    /// The trace lists the error and its `source()` chain followed by a
    /// backtrace taken at this call.
    pub fn from_error<E>(origin: &str, error: &E) -> Self
    where
        E: std::error::Error + 'static,
    {
        let kind = short_type_name(std::any::type_name::<E>()).to_string();

        let mut stack_trace = format!("{kind}: {error}");
        let mut source = error.source();
        if source.is_some() {
            stack_trace.push_str("\n\nCaused by:");
        }
        let mut depth = 0;
        while let Some(cause) = source {
            let _ = write!(stack_trace, "\n    {depth}: {cause}");
            depth += 1;
            source = cause.source();
        }
        let _ = write!(
            stack_trace,
            "\n\nstack backtrace:\n{}",
            Backtrace::force_capture()
        );

        Self {
            origin: origin.to_string(),
            kind,
            message: error.to_string(),
            stack_trace,
        }
    }

    pub(crate) fn from_panic(
        origin: &str,
        payload: &(dyn Any + Send),
        details: Option<PanicDetails>,
    ) -> Self {
        let message = panic_message(payload);

        let stack_trace = match details {
            Some(details) => format!(
                "panicked at {}:\n{message}\nstack backtrace:\n{}",
                details.location.as_deref().unwrap_or("<unknown>"),
                details.backtrace
            ),
            None => format!("panicked at <unknown>:\n{message}"),
        };

        Self {
            origin: origin.to_string(),
            kind: PANIC_KIND.to_string(),
            message,
            stack_trace,
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "Box<dyn Any>".to_string()
    }
}
