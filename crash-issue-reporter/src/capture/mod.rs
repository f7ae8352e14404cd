//! Failure capture and fingerprinting.
//!
//! Failures reach the reporter either as panics, caught with [`catch_panic`],
//! or as errors propagated through `Result`, converted with
//! [`CapturedFailure::from_error`]. Either way the result is turned into an
//! [`ExceptionReport`] whose fingerprint is derived from the stack trace alone.

mod failure;
mod fingerprint;
mod panic_hook;
mod report;

pub use failure::{CapturedFailure, PANIC_KIND};
pub use fingerprint::{compute_fingerprint, FINGERPRINT_LEN};
pub use report::ExceptionReport;

use std::panic::UnwindSafe;

/// Runs `f`, converting a panic into a [`CapturedFailure`].
///
/// While `f` runs, the default panic message is suppressed on this thread and
/// the panic location and backtrace are recorded instead. Panics on other
/// threads are unaffected.
///
/// # Errors
///
/// Returns the captured failure if `f` panicked.
pub fn catch_panic<F, T>(origin: &str, f: F) -> Result<T, CapturedFailure>
where
    F: FnOnce() -> T + UnwindSafe,
{
    let (result, details) = panic_hook::capture(f);
    result.map_err(|payload| CapturedFailure::from_panic(origin, payload.as_ref(), details))
}

/// Name of the enclosing function, for use as a failure origin.
///
/// ```
/// fn load_settings() -> &'static str {
///     crash_issue_reporter::function_name!()
/// }
/// assert_eq!(load_settings(), "load_settings");
/// ```
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        let name = name.strip_suffix("::f").unwrap_or(name);
        let name = name.trim_end_matches("::{{closure}}");
        name.rsplit("::").next().unwrap_or(name)
    }};
}

/// Last path segment of a type name, without generic arguments.
pub(crate) fn short_type_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macro_reports_enclosing_function() {
        assert_eq!(crate::function_name!(), "macro_reports_enclosing_function");
    }

    #[test]
    fn macro_skips_closures() {
        let name = (|| crate::function_name!())();
        assert_eq!(name, "macro_skips_closures");
    }

    #[test]
    fn short_type_name_strips_path_and_generics() {
        assert_eq!(short_type_name("std::io::error::Error"), "Error");
        assert_eq!(short_type_name("my_app::Wrapper<alloc::string::String>"), "Wrapper");
        assert_eq!(short_type_name("Plain"), "Plain");
    }

    #[test]
    fn catch_panic_passes_through_values() {
        let value = catch_panic("compute", || 40 + 2).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn catch_panic_captures_index_out_of_range() {
        let failure = catch_panic("lookup", || {
            let values = vec![1, 2, 3];
            values[std::hint::black_box(5)]
        })
        .unwrap_err();

        assert_eq!(failure.origin, "lookup");
        assert_eq!(failure.kind, PANIC_KIND);
        assert_eq!(
            failure.message,
            "index out of bounds: the len is 3 but the index is 5"
        );
        assert!(failure.stack_trace.starts_with("panicked at "));
        assert!(failure.stack_trace.contains("stack backtrace:"));
    }
}
