//! Error types and handling for relpack
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Constructor helpers are grouped into sub-modules by error domain:
//! - [`manifest`]: package spec errors
//! - [`fs`]: file system and glob errors
//! - [`package`]: package shape errors (special files, collisions)
//! - [`archive`]: fingerprint and archive errors

pub mod archive;
pub mod fs;
pub mod manifest;
pub mod package;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for relpack operations
#[derive(Error, Diagnostic, Debug)]
pub enum RelpackError {
    // Manifest errors
    #[error("Package spec not found: {path}")]
    #[diagnostic(
        code(relpack::manifest::not_found),
        help("Every package directory must contain a 'spec' file")
    )]
    ManifestNotFound { path: String },

    #[error("Failed to read package spec: {path}: {reason}")]
    #[diagnostic(code(relpack::manifest::read_failed))]
    ManifestReadFailed { path: String, reason: String },

    #[error("Failed to parse package spec: {path}: {reason}")]
    #[diagnostic(code(relpack::manifest::parse_failed))]
    ManifestParseFailed { path: String, reason: String },

    #[error("Invalid package spec {path}: {message}")]
    #[diagnostic(code(relpack::manifest::invalid))]
    ManifestInvalid { path: String, message: String },

    // Package shape errors
    #[error("Expected to find '{path}' for package '{package}'")]
    #[diagnostic(
        code(relpack::package::missing_build_script),
        help("The 'packaging' script is mandatory and must be a regular file")
    )]
    MissingBuildScript { package: String, path: String },

    #[error(
        "Expected special '{file}' file to not be included via 'files' key for package '{package}'"
    )]
    #[diagnostic(
        code(relpack::package::naming_collision),
        help("Special files are always added automatically; remove them from 'files' or exclude them")
    )]
    NamingCollision { file: String, package: String },

    // File system errors
    #[error("Failed to stat '{path}': {reason}")]
    #[diagnostic(code(relpack::fs::stat_failed))]
    StatFailed { path: String, reason: String },

    #[error("Listing package files in {root} for pattern '{pattern}': {reason}")]
    #[diagnostic(code(relpack::fs::glob_failed))]
    GlobFailed {
        pattern: String,
        root: String,
        reason: String,
    },

    #[error("Invalid glob pattern '{pattern}': {reason}")]
    #[diagnostic(code(relpack::fs::invalid_pattern))]
    InvalidPattern { pattern: String, reason: String },

    #[error("Expected '{path}' to be a regular file, found a directory")]
    #[diagnostic(code(relpack::fs::not_a_regular_file))]
    NotARegularFile { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(relpack::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(relpack::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(relpack::fs::io_error))]
    IoError { message: String },

    // Archive errors
    #[error("Fingerprint mismatch: expected '{expected}', computed '{actual}'")]
    #[diagnostic(
        code(relpack::archive::fingerprint_mismatch),
        help("Package sources changed after the fingerprint was computed; resolve the package again")
    )]
    FingerprintMismatch { expected: String, actual: String },

    // Wrapping
    #[error("{operation}")]
    #[diagnostic(code(relpack::context))]
    Context {
        operation: String,
        #[source]
        source: Box<RelpackError>,
    },
}

impl RelpackError {
    /// Wrap this error with a description of the operation that failed
    pub fn context(self, operation: impl Into<String>) -> Self {
        RelpackError::Context {
            operation: operation.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error beneath any number of `Context` layers
    pub fn root_cause(&self) -> &RelpackError {
        match self {
            RelpackError::Context { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

impl From<std::io::Error> for RelpackError {
    fn from(err: std::io::Error) -> Self {
        RelpackError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for RelpackError {
    fn from(err: serde_yaml::Error) -> Self {
        RelpackError::ManifestParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for RelpackError {
    fn from(err: serde_json::Error) -> Self {
        RelpackError::IoError {
            message: format!("JSON serialization failed: {err}"),
        }
    }
}

impl From<walkdir::Error> for RelpackError {
    fn from(err: walkdir::Error) -> Self {
        let path = err
            .path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "unknown".to_string());
        RelpackError::StatFailed {
            path,
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, RelpackError>;
