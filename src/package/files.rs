//! Inclusion and exclusion sets across the src and blobs roots
//!
//! Both sets expand patterns in declared order, src root before blobs root.
//! The inclusion set keeps the first match for each relative path; the
//! exclusion set is a plain list whose relative paths are subtracted.

use std::collections::BTreeMap;

use tracing::debug;

use crate::config::ReaderConfig;
use crate::error::Result;
use crate::filesystem::FileSystem;

use super::PackageFile;
use super::matcher::PatternMatcher;

/// Glob-selected files keyed by relative path
pub type FileSet = BTreeMap<String, PackageFile>;

/// Builds the inclusion set from a manifest's `files` patterns
#[derive(Debug)]
pub struct FileSetResolver<'a, F: FileSystem> {
    matcher: PatternMatcher<'a, F>,
    config: &'a ReaderConfig,
}

impl<'a, F: FileSystem> FileSetResolver<'a, F> {
    pub fn new(fs: &'a F, config: &'a ReaderConfig) -> Self {
        Self {
            matcher: PatternMatcher::new(fs),
            config,
        }
    }

    /// Resolve `patterns` into a deduplicated file set.
    ///
    /// First match wins: a src file shadows a blob with the same relative
    /// path, and an earlier pattern shadows a later one.
    pub fn resolve(&self, patterns: &[String]) -> Result<FileSet> {
        let mut files = FileSet::new();

        for pattern in patterns {
            for (root_dir, root) in self.config.roots() {
                let matches = self.matcher.matches(pattern, root_dir, root)?;
                debug!(%pattern, %root, count = matches.len(), "matched package files");

                for file in matches {
                    files.entry(file.relative_path.clone()).or_insert(file);
                }
            }
        }

        Ok(files)
    }
}

/// Builds the removal list from a manifest's `excluded_files` patterns
#[derive(Debug)]
pub struct ExclusionResolver<'a, F: FileSystem> {
    matcher: PatternMatcher<'a, F>,
    config: &'a ReaderConfig,
}

impl<'a, F: FileSystem> ExclusionResolver<'a, F> {
    pub fn new(fs: &'a F, config: &'a ReaderConfig) -> Self {
        Self {
            matcher: PatternMatcher::new(fs),
            config,
        }
    }

    /// Every file matched by `patterns` in either root; duplicates kept
    pub fn resolve(&self, patterns: &[String]) -> Result<Vec<PackageFile>> {
        let mut excluded = Vec::new();

        for pattern in patterns {
            for (root_dir, root) in self.config.roots() {
                let matches = self.matcher.matches(pattern, root_dir, root)?;
                debug!(%pattern, %root, count = matches.len(), "matched excluded files");
                excluded.extend(matches);
            }
        }

        Ok(excluded)
    }

    /// Remove every relative path matched by `patterns` from `files`
    pub fn apply(&self, patterns: &[String], files: &mut FileSet) -> Result<()> {
        for excluded in self.resolve(patterns)? {
            files.remove(&excluded.relative_path);
        }
        Ok(())
    }
}
