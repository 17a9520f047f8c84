//! File system errors

use std::path::Path;

use super::RelpackError;

/// Creates a stat failed error
pub fn stat_failed(path: &Path, reason: impl Into<String>) -> RelpackError {
    RelpackError::StatFailed {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}

/// Creates a glob listing error for a pattern expanded under `root`
pub fn glob_failed(
    pattern: impl Into<String>,
    root: impl Into<String>,
    reason: impl Into<String>,
) -> RelpackError {
    RelpackError::GlobFailed {
        pattern: pattern.into(),
        root: root.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid pattern error
pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> RelpackError {
    RelpackError::InvalidPattern {
        pattern: pattern.into(),
        reason: reason.into(),
    }
}

/// Creates a not-a-regular-file error
pub fn not_a_regular_file(path: &Path) -> RelpackError {
    RelpackError::NotARegularFile {
        path: path.display().to_string(),
    }
}

/// Creates a file read failed error
pub fn read_failed(path: &Path, reason: impl Into<String>) -> RelpackError {
    RelpackError::FileReadFailed {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: &Path, reason: impl Into<String>) -> RelpackError {
    RelpackError::FileWriteFailed {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> RelpackError {
    RelpackError::IoError {
        message: message.into(),
    }
}
