//! Command helper utilities

use relpack::archive::Blake3Archiver;
use relpack::filesystem::OsFileSystem;
use relpack::manifest::YamlManifestSource;
use relpack::package::DirReader;

use crate::cli::Cli;

/// Reader over the local disk as configured on the command line
pub type OsDirReader = DirReader<OsFileSystem, YamlManifestSource, Blake3Archiver>;

/// Build a reader for the release selected by `cli`
pub fn os_reader(cli: &Cli) -> OsDirReader {
    DirReader::new(
        OsFileSystem,
        YamlManifestSource,
        Blake3Archiver,
        cli.reader_config(),
    )
}
