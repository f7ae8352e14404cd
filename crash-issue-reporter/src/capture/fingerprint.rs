//! Stack trace fingerprinting.

use sha2::{Digest, Sha256};

/// Length of a fingerprint in hex characters.
pub const FINGERPRINT_LEN: usize = 64;

/// Computes the fingerprint of a stack trace.
///
/// The fingerprint is the lowercase hex SHA-256 digest of the UTF-8 trace text,
/// so identical traces always produce identical fingerprints.
#[must_use]
pub fn compute_fingerprint(stack_trace: &str) -> String {
    hex::encode(Sha256::digest(stack_trace.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRACE: &str = "panicked at src/main.rs:3:5:\nindex out of bounds";

    #[test]
    fn same_trace_same_fingerprint() {
        assert_eq!(compute_fingerprint(TRACE), compute_fingerprint(TRACE));
    }

    #[test]
    fn different_traces_different_fingerprints() {
        let other = "panicked at src/main.rs:4:5:\nindex out of bounds";
        assert_ne!(compute_fingerprint(TRACE), compute_fingerprint(other));
    }

    #[test]
    fn fingerprint_is_fixed_length_hex() {
        for trace in [TRACE, "", "ünïcödé"] {
            let fingerprint = compute_fingerprint(trace);
            assert_eq!(fingerprint.len(), FINGERPRINT_LEN);
            assert!(fingerprint
                .chars()
                .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn known_digest_of_empty_trace() {
        assert_eq!(
            compute_fingerprint(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
