//! Expanding a single glob pattern against a single root

use std::path::Path;

use tracing::trace;

use crate::error::{Result, fs as fs_error};
use crate::filesystem::FileSystem;
use crate::path_utils;

use super::{FileRoot, PackageFile};

/// Expands manifest patterns into file records under a root
#[derive(Debug)]
pub struct PatternMatcher<'a, F: FileSystem> {
    fs: &'a F,
}

impl<'a, F: FileSystem> PatternMatcher<'a, F> {
    pub fn new(fs: &'a F) -> Self {
        Self { fs }
    }

    /// Expand `pattern` under `root_dir`.
    ///
    /// Matched directories are skipped; their contents are only selected
    /// when the pattern itself reaches them. Patterns are cleaned lexically
    /// first, so relative paths never carry `.`, `..` or empty segments.
    pub fn matches(&self, pattern: &str, root_dir: &Path, root: FileRoot) -> Result<Vec<PackageFile>> {
        let full_pattern = path_utils::join_pattern(root_dir, pattern)?;

        let paths = self
            .fs
            .recursive_glob(&full_pattern)
            .map_err(|e| fs_error::glob_failed(pattern, root.to_string(), e.to_string()))?;

        let mut files = Vec::with_capacity(paths.len());
        for path in paths {
            if self.fs.stat(&path)?.is_dir() {
                trace!(path = %path.display(), "skipping matched directory");
                continue;
            }
            files.push(PackageFile::new(path, root_dir, root));
        }

        Ok(files)
    }
}
