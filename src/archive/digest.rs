//! BLAKE3 fingerprints and reproducible `.tgz` artifacts

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use blake3::Hasher;
use flate2::Compression;
use flate2::write::GzEncoder;
use tracing::debug;

use crate::error::{Result, archive as archive_error, fs as fs_error};
use crate::hash;
use crate::package::PackageFile;

use super::{Archive, Archiver};

/// Permission bits given to special scripts inside the artifact
const SPECIAL_FILE_MODE: u32 = 0o755;

/// [`Archiver`] producing [`Blake3Archive`]s
#[derive(Debug, Clone, Copy, Default)]
pub struct Blake3Archiver;

impl Archiver for Blake3Archiver {
    fn create(
        &self,
        files: Vec<PackageFile>,
        prep_files: Vec<PackageFile>,
        dependencies: Vec<String>,
    ) -> Box<dyn Archive> {
        Box::new(Blake3Archive::new(files, prep_files, dependencies))
    }
}

/// Package inputs fingerprinted with BLAKE3
///
/// The fingerprint covers, in relative-path order, each file's relative
/// path, content hash and permission bits (left out for `exclude_mode`
/// files), followed by the sorted, deduplicated dependency names.
#[derive(Debug, Clone)]
pub struct Blake3Archive {
    files: Vec<PackageFile>,
    prep_files: Vec<PackageFile>,
    dependencies: Vec<String>,
}

impl Blake3Archive {
    pub fn new(files: Vec<PackageFile>, prep_files: Vec<PackageFile>, dependencies: Vec<String>) -> Self {
        Self {
            files,
            prep_files,
            dependencies,
        }
    }

    fn sorted_files(&self) -> Vec<&PackageFile> {
        let mut files: Vec<&PackageFile> = self.files.iter().collect();
        files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        files
    }

    /// Write the tarball to a staging file in `path`'s directory and move it
    /// into place only once it is complete. A failed write leaves nothing
    /// under `path`.
    fn write_tarball(&self, path: &Path) -> Result<()> {
        let write_err = |e: std::io::Error| fs_error::write_failed(path, e.to_string());
        let dest_dir = path.parent().unwrap_or_else(|| Path::new("."));

        let mut staged = tempfile::Builder::new()
            .prefix(".relpack-")
            .suffix(".tgz.partial")
            .tempfile_in(dest_dir)
            .map_err(write_err)?;

        self.write_entries(staged.as_file_mut(), path)?;

        staged
            .persist(path)
            .map_err(|e| fs_error::write_failed(path, e.error.to_string()))?;

        Ok(())
    }

    fn write_entries(&self, file: &mut File, path: &Path) -> Result<()> {
        let write_err = |e: std::io::Error| fs_error::write_failed(path, e.to_string());

        let encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
        let mut tar_builder = tar::Builder::new(encoder);

        for entry in self.sorted_files() {
            let source = File::open(&entry.path)
                .map_err(|e| fs_error::read_failed(&entry.path, e.to_string()))?;
            let size = source
                .metadata()
                .map_err(|e| fs_error::read_failed(&entry.path, e.to_string()))?
                .len();

            let mode = if entry.exclude_mode {
                SPECIAL_FILE_MODE
            } else {
                file_mode(&entry.path)?
            };

            let mut header = tar::Header::new_gnu();
            header.set_entry_type(tar::EntryType::Regular);
            header.set_size(size);
            header.set_mode(mode);
            header.set_mtime(0);
            header.set_uid(0);
            header.set_gid(0);

            tar_builder
                .append_data(&mut header, &entry.relative_path, source)
                .map_err(write_err)?;
        }

        let encoder = tar_builder.into_inner().map_err(write_err)?;
        let mut writer = encoder.finish().map_err(write_err)?;
        writer.flush().map_err(write_err)?;

        Ok(())
    }
}

impl Archive for Blake3Archive {
    fn fingerprint(&self) -> Result<String> {
        let mut hasher = Hasher::new();

        for file in self.sorted_files() {
            let content_hash = hash::hash_file(&file.path)?;
            let mode = if file.exclude_mode {
                "-".to_string()
            } else {
                format!("{:o}", file_mode(&file.path)?)
            };

            hasher.update(file.relative_path.as_bytes());
            hasher.update(b"\0");
            hasher.update(content_hash.as_bytes());
            hasher.update(b"\0");
            hasher.update(mode.as_bytes());
            hasher.update(b"\n");
        }

        let mut dependencies: Vec<&str> = self.dependencies.iter().map(String::as_str).collect();
        dependencies.sort_unstable();
        dependencies.dedup();
        for dependency in dependencies {
            hasher.update(b"dep\0");
            hasher.update(dependency.as_bytes());
            hasher.update(b"\n");
        }

        Ok(hasher.finalize().to_hex().to_string())
    }

    fn build(&self, expected_fingerprint: &str, dest_dir: &Path) -> Result<PathBuf> {
        let actual = self.fingerprint()?;
        if actual != expected_fingerprint {
            return Err(archive_error::fingerprint_mismatch(expected_fingerprint, actual));
        }

        std::fs::create_dir_all(dest_dir).map_err(|e| fs_error::write_failed(dest_dir, e.to_string()))?;

        let path = dest_dir.join(format!("{actual}.tgz"));
        self.write_tarball(&path)?;
        debug!(path = %path.display(), files = self.files.len(), "wrote package archive");

        Ok(path)
    }

    fn files(&self) -> &[PackageFile] {
        &self.files
    }

    fn prep_files(&self) -> &[PackageFile] {
        &self.prep_files
    }
}

/// Permission bits of a file
#[cfg(unix)]
fn file_mode(path: &Path) -> Result<u32> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = std::fs::metadata(path).map_err(|e| fs_error::read_failed(path, e.to_string()))?;
    Ok(metadata.permissions().mode() & 0o777)
}

/// Permission bits of a file
#[cfg(not(unix))]
fn file_mode(path: &Path) -> Result<u32> {
    let metadata = std::fs::metadata(path).map_err(|e| fs_error::read_failed(path, e.to_string()))?;
    Ok(if metadata.permissions().readonly() { 0o444 } else { 0o644 })
}
