//! Common test utilities for relpack integration tests

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A release tree in a temporary directory
#[allow(dead_code)]
pub struct TestRelease {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to release root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestRelease {
    /// Create an empty release with `packages/`, `src/` and `blobs/`
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        for dir in ["packages", "src", "blobs"] {
            std::fs::create_dir_all(path.join(dir)).expect("Failed to create release directory");
        }
        Self { temp, path }
    }

    /// Write a file relative to the release root, creating parents
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Write a file under `src/`
    pub fn write_src(&self, relative: &str, content: &str) -> PathBuf {
        self.write_file(&format!("src/{relative}"), content)
    }

    /// Write a file under `blobs/`
    pub fn write_blob(&self, relative: &str, content: &str) -> PathBuf {
        self.write_file(&format!("blobs/{relative}"), content)
    }

    /// Create `packages/<name>` with a `packaging` script and a spec
    pub fn create_package(&self, name: &str, spec: &str) -> PathBuf {
        self.write_file(&format!("packages/{name}/spec"), spec);
        self.write_file(&format!("packages/{name}/packaging"), "set -e\nmake install\n");
        self.package_dir(name)
    }

    pub fn package_dir(&self, name: &str) -> PathBuf {
        self.path.join("packages").join(name)
    }

    pub fn src_dir(&self) -> PathBuf {
        self.path.join("src")
    }

    pub fn blobs_dir(&self) -> PathBuf {
        self.path.join("blobs")
    }

    pub fn file_exists(&self, relative: &str) -> bool {
        self.path.join(relative).exists()
    }
}

impl Default for TestRelease {
    fn default() -> Self {
        Self::new()
    }
}

/// Set `mode` on a file
#[cfg(unix)]
#[allow(dead_code)]
pub fn set_mode(path: &Path, mode: u32) {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode))
        .expect("Failed to set permissions");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_creation() {
        let release = TestRelease::new();
        assert!(release.file_exists("packages"));
        assert!(release.file_exists("src"));
        assert!(release.file_exists("blobs"));
    }

    #[test]
    fn test_release_create_package() {
        let release = TestRelease::new();
        release.create_package("nginx", "name: nginx\n");
        assert!(release.file_exists("packages/nginx/spec"));
        assert!(release.file_exists("packages/nginx/packaging"));
    }
}
