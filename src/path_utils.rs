//! Cross-platform path utilities for relpack
//!
//! Relative paths are the identity key of a package file, so every path that
//! ends up in a fingerprint goes through these helpers and uses forward
//! slashes regardless of platform.

use std::path::Path;

use crate::error::{Result, fs as fs_error};

/// Convert a path to a string with forward slashes.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use relpack::path_utils::to_forward_slashes;
///
/// assert_eq!(to_forward_slashes(Path::new("C:\\Users\\file.txt")), "C:/Users/file.txt");
/// ```
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Compute the forward-slash path of `path` relative to `root`.
///
/// Falls back to the full path when `path` is not under `root`.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use relpack::path_utils::relative_path;
///
/// assert_eq!(relative_path(Path::new("/r/src/a.c"), Path::new("/r")), "src/a.c");
/// ```
pub fn relative_path(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    to_forward_slashes(relative)
}

/// Characters that turn a path component into a glob component
pub const GLOB_META_CHARS: &[char] = &['*', '?', '[', ']', '{', '}', '<', '>'];

/// Whether a single path component contains glob syntax
pub fn is_glob_component(component: &str) -> bool {
    component.contains(GLOB_META_CHARS)
}

/// Join a manifest glob pattern onto a root directory.
///
/// The pattern is cleaned lexically before joining: empty and `.` segments
/// are dropped and `..` removes the preceding segment. A pattern that would
/// climb out of the root, or whose `..` follows a glob component, is
/// rejected.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use relpack::path_utils::join_pattern;
///
/// assert_eq!(join_pattern(Path::new("/r/src/"), "./lib/**/*.so").unwrap(), "/r/src/lib/**/*.so");
/// assert_eq!(join_pattern(Path::new("/r/src"), "sub/../packaging").unwrap(), "/r/src/packaging");
/// assert!(join_pattern(Path::new("/r/src"), "../packages/foo/spec").is_err());
/// ```
pub fn join_pattern(root: &Path, pattern: &str) -> Result<String> {
    let normalized = pattern.replace('\\', "/");
    let mut segments: Vec<&str> = Vec::new();

    for segment in normalized.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.pop() {
                Some(previous) if !is_glob_component(previous) => {}
                Some(_) => {
                    return Err(fs_error::invalid_pattern(
                        pattern,
                        "'..' cannot follow a glob component",
                    ));
                }
                None => {
                    return Err(fs_error::invalid_pattern(
                        pattern,
                        "pattern leaves the root directory",
                    ));
                }
            },
            other => segments.push(other),
        }
    }

    if segments.is_empty() {
        return Err(fs_error::invalid_pattern(pattern, "pattern names the root directory itself"));
    }

    let root = to_forward_slashes(root);
    let root = root.trim_end_matches('/');
    Ok(format!("{root}/{}", segments.join("/")))
}
