//! Command implementations for relpack CLI

pub mod build;
pub mod files;
pub mod fingerprint;
pub mod helpers;
