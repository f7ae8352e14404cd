//! Deliberate failure used to check the reporting pipeline end to end.

use crate::capture::{catch_panic, CapturedFailure};
use std::hint::black_box;

/// Triggers an index-out-of-range panic and returns it as a captured failure.
///
/// Returns `None` only if indexing unexpectedly succeeds.
#[must_use]
pub fn simulate_index_out_of_range() -> Option<CapturedFailure> {
    catch_panic(crate::function_name!(), || {
        let sample = vec![1, 2, 3];
        sample[black_box(5)]
    })
    .err()
}
