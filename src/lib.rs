//! relpack - deterministic build inputs for release packages
//!
//! Resolves a package directory (`spec`, `packaging`, optional
//! `pre_packaging`) plus the spec's glob-selected files from a release's
//! `src/` and `blobs/` trees into an ordered file list, and fingerprints it
//! so a release builder can tell whether a cached artifact is still valid.
//!
//! ```no_run
//! use std::path::Path;
//!
//! use relpack::archive::Blake3Archiver;
//! use relpack::config::{ReaderConfig, ReleaseLayout};
//! use relpack::filesystem::OsFileSystem;
//! use relpack::manifest::YamlManifestSource;
//! use relpack::package::DirReader;
//!
//! # fn main() -> relpack::error::Result<()> {
//! let layout = ReleaseLayout::new("/path/to/release");
//! let reader = DirReader::new(
//!     OsFileSystem,
//!     YamlManifestSource,
//!     Blake3Archiver,
//!     ReaderConfig::from(&layout),
//! );
//! let package = reader.read(&layout.package_dir("nginx"))?;
//! println!("{} {}", package.name(), package.fingerprint());
//! # Ok(())
//! # }
//! ```

pub mod archive;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod hash;
pub mod manifest;
pub mod package;
pub mod path_utils;

#[cfg(test)]
mod test_fixtures;
