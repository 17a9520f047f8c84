//! Release directory layout
//!
//! ```text
//! <release>/
//!   packages/<name>/{spec,packaging,pre_packaging}
//!   src/
//!   blobs/
//! ```

use std::path::{Path, PathBuf};

use crate::error::{Result, fs as fs_error};
use crate::package::FileRoot;

/// Directory holding package directories
pub const PACKAGES_DIR: &str = "packages";

/// Directory holding tracked sources
pub const SRC_DIR: &str = "src";

/// Directory holding vendored blobs
pub const BLOBS_DIR: &str = "blobs";

/// Paths derived from a release directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseLayout {
    root: PathBuf,
}

impl ReleaseLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn src_dir(&self) -> PathBuf {
        self.root.join(SRC_DIR)
    }

    pub fn blobs_dir(&self) -> PathBuf {
        self.root.join(BLOBS_DIR)
    }

    pub fn packages_dir(&self) -> PathBuf {
        self.root.join(PACKAGES_DIR)
    }

    pub fn package_dir(&self, name: &str) -> PathBuf {
        self.packages_dir().join(name)
    }

    /// Names of all package directories, sorted
    ///
    /// A release without a `packages/` directory has no packages.
    pub fn package_names(&self) -> Result<Vec<String>> {
        let packages_dir = self.packages_dir();
        if !packages_dir.is_dir() {
            return Ok(Vec::new());
        }

        let entries = std::fs::read_dir(&packages_dir)
            .map_err(|e| fs_error::read_failed(&packages_dir, e.to_string()))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                names.push(entry.file_name().to_string_lossy().to_string());
            }
        }

        names.sort();
        Ok(names)
    }
}

/// The two candidate roots glob patterns are expanded against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Primary root; its matches shadow blob matches
    pub src_dir: PathBuf,
    /// Secondary root
    pub blobs_dir: PathBuf,
}

impl ReaderConfig {
    pub fn new(src_dir: impl Into<PathBuf>, blobs_dir: impl Into<PathBuf>) -> Self {
        Self {
            src_dir: src_dir.into(),
            blobs_dir: blobs_dir.into(),
        }
    }

    /// Roots in precedence order
    pub fn roots(&self) -> [(&Path, FileRoot); 2] {
        [
            (self.src_dir.as_path(), FileRoot::Src),
            (self.blobs_dir.as_path(), FileRoot::Blobs),
        ]
    }
}

impl From<&ReleaseLayout> for ReaderConfig {
    fn from(layout: &ReleaseLayout) -> Self {
        Self::new(layout.src_dir(), layout.blobs_dir())
    }
}
