//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use relpack::config::{ReaderConfig, ReleaseLayout};

/// relpack - release package fingerprinting
///
/// Resolve package build inputs into deterministic fingerprints.
#[derive(Parser, Debug)]
#[command(
    name = "relpack",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Deterministic build-input fingerprints for release packages",
    long_about = "relpack resolves each package's spec, packaging scripts and glob-selected \
                  files from the release's src/ and blobs/ trees, and computes a content \
                  fingerprint that decides whether a cached package artifact can be reused.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  relpack fingerprint\n    \
                  relpack -r ./my-release fingerprint nginx --json\n    \
                  relpack files nginx\n    \
                  relpack build nginx --out ./dev_releases"
)]
pub struct Cli {
    /// Release directory containing packages/, src/ and blobs/
    #[arg(
        long,
        short = 'r',
        global = true,
        env = "RELPACK_RELEASE_DIR",
        default_value = "."
    )]
    pub release_dir: PathBuf,

    /// Override the source root (defaults to <release-dir>/src)
    #[arg(long, global = true, env = "RELPACK_SRC_DIR")]
    pub src_dir: Option<PathBuf>,

    /// Override the blobs root (defaults to <release-dir>/blobs)
    #[arg(long, global = true, env = "RELPACK_BLOBS_DIR")]
    pub blobs_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn layout(&self) -> ReleaseLayout {
        ReleaseLayout::new(&self.release_dir)
    }

    /// Source roots, with explicit overrides taking precedence
    pub fn reader_config(&self) -> ReaderConfig {
        let layout = self.layout();
        ReaderConfig::new(
            self.src_dir.clone().unwrap_or_else(|| layout.src_dir()),
            self.blobs_dir.clone().unwrap_or_else(|| layout.blobs_dir()),
        )
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print package fingerprints
    Fingerprint(FingerprintArgs),

    /// List the resolved build inputs of a package
    Files(FilesArgs),

    /// Write a package archive named after its fingerprint
    Build(BuildArgs),
}

/// Arguments for the fingerprint command
#[derive(Parser, Debug)]
pub struct FingerprintArgs {
    /// Package names (defaults to every package in the release)
    pub packages: Vec<String>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the files command
#[derive(Parser, Debug)]
pub struct FilesArgs {
    /// Package name
    pub package: String,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the build command
#[derive(Parser, Debug)]
pub struct BuildArgs {
    /// Package name
    pub package: String,

    /// Directory to write the archive into
    #[arg(long, short = 'o')]
    pub out: PathBuf,
}
