//! Test doubles for package resolution.
//!
//! Resolution logic is exercised against an in-memory file system, a fixed
//! manifest and an archiver that records what it was handed, so unit tests
//! can assert on precedence and ordering without touching the disk.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::FakeFileSystem;
//!
//! let fs = FakeFileSystem::new()
//!     .with_file("/r/src/a.c")
//!     .with_glob("/r/src/*.c", &["/r/src/a.c"]);
//! ```

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::archive::{Archive, Archiver};
use crate::error::{Result, fs as fs_error, manifest as manifest_error};
use crate::filesystem::{FileKind, FileSystem};
use crate::manifest::{Manifest, ManifestSource};
use crate::package::PackageFile;

/// In-memory [`FileSystem`] with canned glob results
///
/// Globs that were never registered have no matches.
#[derive(Debug, Default)]
pub struct FakeFileSystem {
    files: HashSet<PathBuf>,
    dirs: HashSet<PathBuf>,
    globs: HashMap<String, Vec<PathBuf>>,
    glob_errors: HashSet<String>,
    stat_errors: HashSet<PathBuf>,
}

impl FakeFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str) -> Self {
        self.files.insert(PathBuf::from(path));
        self
    }

    pub fn with_dir(mut self, path: &str) -> Self {
        self.dirs.insert(PathBuf::from(path));
        self
    }

    pub fn with_glob(mut self, pattern: &str, matches: &[&str]) -> Self {
        self.globs
            .insert(pattern.to_string(), matches.iter().map(PathBuf::from).collect());
        self
    }

    pub fn with_glob_error(mut self, pattern: &str) -> Self {
        self.glob_errors.insert(pattern.to_string());
        self
    }

    pub fn with_stat_error(mut self, path: &str) -> Self {
        self.stat_errors.insert(PathBuf::from(path));
        self
    }
}

impl FileSystem for FakeFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains(path) || self.dirs.contains(path)
    }

    fn stat(&self, path: &Path) -> Result<FileKind> {
        if self.stat_errors.contains(path) {
            return Err(fs_error::stat_failed(path, "fake stat error"));
        }
        if self.dirs.contains(path) {
            return Ok(FileKind::Directory);
        }
        if self.files.contains(path) {
            return Ok(FileKind::File);
        }
        Err(fs_error::stat_failed(path, "no such file or directory"))
    }

    fn recursive_glob(&self, pattern: &str) -> Result<Vec<PathBuf>> {
        if self.glob_errors.contains(pattern) {
            return Err(fs_error::io_error(format!("fake glob error for {pattern}")));
        }
        Ok(self.globs.get(pattern).cloned().unwrap_or_default())
    }
}

/// [`ManifestSource`] returning one fixed manifest, or always failing
#[derive(Debug)]
pub struct StaticManifests {
    manifest: Option<Manifest>,
}

impl StaticManifests {
    pub fn new(manifest: Manifest) -> Self {
        Self {
            manifest: Some(manifest),
        }
    }

    pub fn failing() -> Self {
        Self { manifest: None }
    }
}

impl ManifestSource for StaticManifests {
    fn parse(&self, spec_path: &Path) -> Result<Manifest> {
        self.manifest
            .clone()
            .ok_or_else(|| manifest_error::parse_failed(spec_path.display().to_string(), "fake parse error"))
    }
}

/// Arguments of one [`Archiver::create`] call
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub files: Vec<PackageFile>,
    pub prep_files: Vec<PackageFile>,
    pub dependencies: Vec<String>,
}

/// [`Archiver`] that records its inputs and returns a canned fingerprint
#[derive(Debug, Default)]
pub struct RecordingArchiver {
    calls: Mutex<Vec<RecordedCall>>,
    fail: bool,
}

impl RecordingArchiver {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> RecordedCall {
        self.calls().pop().expect("archiver was never called")
    }
}

impl Archiver for RecordingArchiver {
    fn create(
        &self,
        files: Vec<PackageFile>,
        prep_files: Vec<PackageFile>,
        dependencies: Vec<String>,
    ) -> Box<dyn Archive> {
        let call = RecordedCall {
            files,
            prep_files,
            dependencies,
        };
        self.calls.lock().unwrap().push(call.clone());
        Box::new(StubArchive {
            call,
            fail: self.fail,
        })
    }
}

struct StubArchive {
    call: RecordedCall,
    fail: bool,
}

impl Archive for StubArchive {
    fn fingerprint(&self) -> Result<String> {
        if self.fail {
            return Err(fs_error::read_failed(Path::new("/stub"), "fake archive error"));
        }
        Ok("recorded-fingerprint".to_string())
    }

    fn build(&self, _expected_fingerprint: &str, dest_dir: &Path) -> Result<PathBuf> {
        Ok(dest_dir.join("stub.tgz"))
    }

    fn files(&self) -> &[PackageFile] {
        &self.call.files
    }

    fn prep_files(&self) -> &[PackageFile] {
        &self.call.prep_files
    }
}
