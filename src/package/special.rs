//! Locating the special `packaging` and `pre_packaging` scripts

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::filesystem::FileSystem;

use super::PackageFile;

/// Outcome of looking up a special script
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Located {
    /// A regular file is present
    File(PackageFile),
    /// Nothing exists at the expected path
    Missing,
    /// A directory sits where the script should be
    Directory(PathBuf),
}

/// Finds special scripts by fixed name inside a package directory
#[derive(Debug)]
pub struct SpecialFileLocator<'a, F: FileSystem> {
    fs: &'a F,
}

impl<'a, F: FileSystem> SpecialFileLocator<'a, F> {
    pub fn new(fs: &'a F) -> Self {
        Self { fs }
    }

    /// Look up `name` in `package_dir`; stat failures are errors
    pub fn locate(&self, package_dir: &Path, name: &str) -> Result<Located> {
        let path = package_dir.join(name);

        if !self.fs.exists(&path) {
            return Ok(Located::Missing);
        }

        if self.fs.stat(&path)?.is_dir() {
            return Ok(Located::Directory(path));
        }

        Ok(Located::File(PackageFile::special(path, package_dir)))
    }
}
