//! Reading a package directory into a fingerprinted [`Package`]

use std::path::Path;

use tracing::{debug, info};

use crate::archive::Archiver;
use crate::config::ReaderConfig;
use crate::error::{Result, fs as fs_error, package as package_error};
use crate::filesystem::FileSystem;
use crate::manifest::ManifestSource;

use super::files::{ExclusionResolver, FileSetResolver};
use super::special::{Located, SpecialFileLocator};
use super::validation::check_special_files;
use super::{CollectedFiles, PACKAGING_FILE, PRE_PACKAGING_FILE, Package, Resource, SPEC_FILE};

/// Resolves package directories against a release's src and blobs roots
///
/// The reader holds no mutable state; resolving different packages from
/// several threads is fine as long as the collaborators allow it.
#[derive(Debug)]
pub struct DirReader<F, M, A> {
    fs: F,
    manifests: M,
    archiver: A,
    config: ReaderConfig,
}

impl<F, M, A> DirReader<F, M, A>
where
    F: FileSystem,
    M: ManifestSource,
    A: Archiver,
{
    pub fn new(fs: F, manifests: M, archiver: A, config: ReaderConfig) -> Self {
        Self {
            fs,
            manifests,
            archiver,
            config,
        }
    }

    /// Resolve the package at `path` and fingerprint its inputs
    pub fn read(&self, path: &Path) -> Result<Package> {
        let collected = self
            .collect(path)
            .map_err(|e| e.context(format!("Collecting package files in '{}'", path.display())))?;

        let CollectedFiles {
            manifest,
            files,
            prep_files,
        } = collected;

        let archive = self
            .archiver
            .create(files, prep_files, manifest.dependencies.clone());
        let fingerprint = archive.fingerprint()?;
        info!(package = %manifest.name, %fingerprint, "resolved package");

        let resource = Resource::new(manifest.name, fingerprint, archive);
        Ok(Package::new(resource, manifest.dependencies))
    }

    /// Resolve the files of the package at `path` without archiving them.
    ///
    /// The list holds `packaging`, then `pre_packaging` when present, then
    /// glob-selected files ordered by relative path.
    pub fn collect(&self, path: &Path) -> Result<CollectedFiles> {
        let manifest = self.manifests.parse(&path.join(SPEC_FILE))?;
        let locator = SpecialFileLocator::new(&self.fs);

        let packaging = match locator.locate(path, PACKAGING_FILE)? {
            Located::File(file) => file,
            Located::Missing | Located::Directory(_) => {
                return Err(package_error::missing_build_script(
                    &manifest.name,
                    &path.join(PACKAGING_FILE),
                ));
            }
        };

        let prep_files = match locator.locate(path, PRE_PACKAGING_FILE)? {
            Located::File(file) => vec![file],
            Located::Missing => Vec::new(),
            Located::Directory(dir) => return Err(fs_error::not_a_regular_file(&dir)),
        };

        let mut selected = FileSetResolver::new(&self.fs, &self.config).resolve(&manifest.files)?;
        ExclusionResolver::new(&self.fs, &self.config).apply(&manifest.excluded_files, &mut selected)?;
        check_special_files(&selected, &manifest.name)?;

        let mut files = Vec::with_capacity(1 + prep_files.len() + selected.len());
        files.push(packaging);
        files.extend(prep_files.iter().cloned());
        files.extend(selected.into_values());

        debug!(package = %manifest.name, files = files.len(), "collected package files");

        Ok(CollectedFiles {
            manifest,
            files,
            prep_files,
        })
    }
}
