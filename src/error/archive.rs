//! Archive errors

use super::RelpackError;

/// Creates a fingerprint mismatch error
pub fn fingerprint_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> RelpackError {
    RelpackError::FingerprintMismatch {
        expected: expected.into(),
        actual: actual.into(),
    }
}
