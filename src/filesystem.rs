//! File system access used during package resolution
//!
//! Resolution only ever reads the source tree, through the [`FileSystem`]
//! trait. [`OsFileSystem`] is the real implementation; tests substitute an
//! in-memory one.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

use crate::error::{Result, fs as fs_error};
use crate::path_utils;

/// Shape of an existing path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    File,
    Directory,
}

impl FileKind {
    pub fn is_dir(self) -> bool {
        matches!(self, FileKind::Directory)
    }
}

/// Read-only file system operations needed to resolve a package
pub trait FileSystem {
    /// Whether anything exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Stat `path`, following symlinks
    fn stat(&self, path: &Path) -> Result<FileKind>;

    /// Expand an absolute glob pattern into matching paths.
    ///
    /// `**` matches across directory boundaries, `*` does not. Both files
    /// and directories may be returned. A pattern whose base directory does
    /// not exist has no matches.
    fn recursive_glob(&self, pattern: &str) -> Result<Vec<PathBuf>>;
}

/// [`FileSystem`] backed by the local disk
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn stat(&self, path: &Path) -> Result<FileKind> {
        let metadata =
            std::fs::metadata(path).map_err(|e| fs_error::stat_failed(path, e.to_string()))?;
        if metadata.is_dir() {
            Ok(FileKind::Directory)
        } else {
            Ok(FileKind::File)
        }
    }

    fn recursive_glob(&self, pattern: &str) -> Result<Vec<PathBuf>> {
        let (base, rest) = split_glob(pattern);

        let Some(rest) = rest else {
            let path = PathBuf::from(base);
            return Ok(if path.exists() { vec![path] } else { Vec::new() });
        };

        let base = PathBuf::from(base);
        if !base.is_dir() {
            return Ok(Vec::new());
        }

        let glob =
            Glob::new(&rest).map_err(|e| fs_error::invalid_pattern(pattern, e.to_string()))?;

        let mut walker = WalkDir::new(&base).min_depth(1).sort_by_file_name();
        if !rest.contains("**") {
            walker = walker.max_depth(rest.split('/').count());
        }

        let mut matches = Vec::new();
        for entry in walker {
            let entry = entry?;
            let relative = path_utils::relative_path(entry.path(), &base);
            let candidate = CandidatePath::from(relative.as_str());
            if glob.matched(&candidate).is_some() {
                matches.push(entry.into_path());
            }
        }

        Ok(matches)
    }
}

/// Split a pattern into its literal base directory and the glob remainder.
///
/// The remainder is `None` when the pattern contains no glob syntax at all.
fn split_glob(pattern: &str) -> (String, Option<String>) {
    let normalized = pattern.replace('\\', "/");
    let components: Vec<&str> = normalized.split('/').collect();

    let Some(first_glob) = components
        .iter()
        .position(|c| path_utils::is_glob_component(c))
    else {
        return (normalized, None);
    };

    let base = components[..first_glob].join("/");
    let base = if base.is_empty() {
        if normalized.starts_with('/') {
            "/".to_string()
        } else {
            ".".to_string()
        }
    } else {
        base
    };

    (base, Some(components[first_glob..].join("/")))
}
