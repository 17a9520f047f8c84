//! Package spec errors

use super::RelpackError;

/// Creates a spec not found error
pub fn not_found(path: impl Into<String>) -> RelpackError {
    RelpackError::ManifestNotFound { path: path.into() }
}

/// Creates a spec read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> RelpackError {
    RelpackError::ManifestReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a spec parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> RelpackError {
    RelpackError::ManifestParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid spec error
pub fn invalid(path: impl Into<String>, message: impl Into<String>) -> RelpackError {
    RelpackError::ManifestInvalid {
        path: path.into(),
        message: message.into(),
    }
}
