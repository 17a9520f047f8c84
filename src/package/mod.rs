//! Package build-input resolution
//!
//! A package directory holds a `spec`, a mandatory `packaging` script and an
//! optional `pre_packaging` script. Everything else the package needs is
//! selected by the spec's glob patterns from two candidate roots: the
//! release's `src/` tree and its `blobs/` tree.
//!
//! - [`special`]: locating the two special scripts
//! - [`matcher`]: expanding one pattern against one root
//! - [`files`]: inclusion and exclusion sets across both roots
//! - [`validation`]: rejecting special files selected by glob
//! - [`reader`]: assembling the final file list into a [`Package`]

pub mod files;
pub mod matcher;
pub mod reader;
pub mod special;
pub mod validation;

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::archive::Archive;
use crate::error::Result;
use crate::manifest::Manifest;
use crate::path_utils;

pub use reader::DirReader;

/// Relative path of the mandatory build script
pub const PACKAGING_FILE: &str = "packaging";

/// Relative path of the optional pre-build script
pub const PRE_PACKAGING_FILE: &str = "pre_packaging";

/// Relative path of the package spec
pub const SPEC_FILE: &str = "spec";

/// Special file names that may never be selected by a glob
pub const SPECIAL_FILES: [&str; 2] = [PACKAGING_FILE, PRE_PACKAGING_FILE];

/// Which root a file was found under
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileRoot {
    /// The package directory itself (special files only)
    Package,
    /// The release source tree
    Src,
    /// The release blobs tree
    Blobs,
}

impl fmt::Display for FileRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FileRoot::Package => "package",
            FileRoot::Src => "src",
            FileRoot::Blobs => "blobs",
        };
        f.write_str(label)
    }
}

/// A file selected as build input for a package
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageFile {
    /// Absolute location on disk
    pub path: PathBuf,
    /// Path relative to the root it matched under, with forward slashes
    pub relative_path: String,
    /// Root the file was found under
    pub root: FileRoot,
    /// Leave permission bits out of the fingerprint
    pub exclude_mode: bool,
}

impl PackageFile {
    /// Create a file record for `path` found under `root_dir`
    pub fn new(path: impl Into<PathBuf>, root_dir: &Path, root: FileRoot) -> Self {
        let path = path.into();
        let relative_path = path_utils::relative_path(&path, root_dir);
        Self {
            path,
            relative_path,
            root,
            exclude_mode: false,
        }
    }

    /// Create the record for a special script in the package directory
    pub fn special(path: impl Into<PathBuf>, package_dir: &Path) -> Self {
        Self {
            exclude_mode: true,
            ..Self::new(path, package_dir, FileRoot::Package)
        }
    }
}

/// Files collected for a package, before archiving
#[derive(Debug, Clone)]
pub struct CollectedFiles {
    /// The parsed spec
    pub manifest: Manifest,
    /// Special scripts first, then glob-selected files by relative path
    pub files: Vec<PackageFile>,
    /// The pre-build script, if present
    pub prep_files: Vec<PackageFile>,
}

/// Content-addressed identity of a package's inputs
pub struct Resource {
    name: String,
    fingerprint: String,
    archive: Box<dyn Archive>,
}

impl Resource {
    pub fn new(name: impl Into<String>, fingerprint: impl Into<String>, archive: Box<dyn Archive>) -> Self {
        Self {
            name: name.into(),
            fingerprint: fingerprint.into(),
            archive,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn archive(&self) -> &dyn Archive {
        self.archive.as_ref()
    }

    /// Materialize the archive into `dest_dir`, checking the inputs still
    /// match this resource's fingerprint
    pub fn build(&self, dest_dir: &Path) -> Result<PathBuf> {
        self.archive.build(&self.fingerprint, dest_dir)
    }
}

impl fmt::Debug for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("name", &self.name)
            .field("fingerprint", &self.fingerprint)
            .finish_non_exhaustive()
    }
}

/// A resolved package ready for a release-level dependency graph
#[derive(Debug)]
pub struct Package {
    resource: Resource,
    dependencies: Vec<String>,
}

impl Package {
    pub fn new(resource: Resource, dependencies: Vec<String>) -> Self {
        Self {
            resource,
            dependencies,
        }
    }

    pub fn name(&self) -> &str {
        self.resource.name()
    }

    pub fn fingerprint(&self) -> &str {
        self.resource.fingerprint()
    }

    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }
}

/// Serializable view of a package for reporting
#[derive(Debug, Clone, Serialize)]
pub struct PackageSummary {
    pub name: String,
    pub fingerprint: String,
    pub dependencies: Vec<String>,
}

impl From<&Package> for PackageSummary {
    fn from(package: &Package) -> Self {
        Self {
            name: package.name().to_string(),
            fingerprint: package.fingerprint().to_string(),
            dependencies: package.dependencies().to_vec(),
        }
    }
}
