//! Archive collaborators
//!
//! Package resolution hands its final file list to an [`Archiver`], which
//! owns the fingerprint algorithm and the artifact byte format. The default
//! implementation is [`digest::Blake3Archiver`].

pub mod digest;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::package::PackageFile;

pub use digest::{Blake3Archive, Blake3Archiver};

/// Creates archives from resolved package inputs
pub trait Archiver {
    /// Create an archive over `files`.
    ///
    /// `prep_files` is the pre-build subset of `files`; `dependencies` are
    /// folded into the fingerprint alongside file contents.
    fn create(
        &self,
        files: Vec<PackageFile>,
        prep_files: Vec<PackageFile>,
        dependencies: Vec<String>,
    ) -> Box<dyn Archive>;
}

/// Content-addressed view of a package's inputs
pub trait Archive: Send + Sync {
    /// Stable hash of the archive inputs
    fn fingerprint(&self) -> Result<String>;

    /// Write the artifact into `dest_dir` and return its path.
    ///
    /// Fails when the inputs no longer hash to `expected_fingerprint`.
    fn build(&self, expected_fingerprint: &str, dest_dir: &Path) -> Result<PathBuf>;

    /// Every file in the archive
    fn files(&self) -> &[PackageFile];

    /// The pre-build scripts among [`Archive::files`]
    fn prep_files(&self) -> &[PackageFile];
}
