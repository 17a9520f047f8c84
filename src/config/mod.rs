//! Configuration for package resolution
//!
//! - [`release`]: release directory layout and the source roots a
//!   [`crate::package::DirReader`] resolves patterns against

pub mod release;

// Re-export commonly used types
pub use release::{ReaderConfig, ReleaseLayout};
