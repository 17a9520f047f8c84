//! Package spec (`spec`) data structures and parsing

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, manifest as manifest_error};

/// Parsed package spec
///
/// ```yaml
/// name: foo
/// dependencies: [bar]
/// files:
///   - src/*.c
/// excluded_files:
///   - src/test_*.c
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Manifest {
    /// Package name
    pub name: String,

    /// Glob patterns selecting package files; earlier patterns take precedence
    #[serde(default)]
    pub files: Vec<String>,

    /// Glob patterns removing files selected by `files`
    #[serde(default)]
    pub excluded_files: Vec<String>,

    /// Names of packages this package depends on
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl Manifest {
    /// Create a manifest with a name and no files or dependencies
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Parse a manifest from a YAML string
    ///
    /// `origin` names the document in error messages.
    pub fn from_yaml(yaml: &str, origin: &str) -> Result<Self> {
        let manifest: Self = serde_yaml::from_str(yaml)
            .map_err(|e| manifest_error::parse_failed(origin, e.to_string()))?;
        manifest.validate(origin)?;
        Ok(manifest)
    }

    /// Validate manifest contents
    pub fn validate(&self, origin: &str) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(manifest_error::invalid(origin, "'name' must not be empty"));
        }

        if let Some(pattern) = self
            .files
            .iter()
            .chain(&self.excluded_files)
            .find(|p| p.trim().is_empty())
        {
            return Err(manifest_error::invalid(
                origin,
                format!("file patterns must not be empty (got {pattern:?})"),
            ));
        }

        Ok(())
    }
}

/// Source of parsed package specs
pub trait ManifestSource {
    /// Parse the spec at `spec_path`; no partial manifest is ever returned
    fn parse(&self, spec_path: &Path) -> Result<Manifest>;
}

/// [`ManifestSource`] reading YAML spec files from disk
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlManifestSource;

impl ManifestSource for YamlManifestSource {
    fn parse(&self, spec_path: &Path) -> Result<Manifest> {
        let origin = spec_path.display().to_string();

        let content = std::fs::read_to_string(spec_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                manifest_error::not_found(&origin)
            } else {
                manifest_error::read_failed(&origin, e.to_string())
            }
        })?;

        Manifest::from_yaml(&content, &origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RelpackError;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_spec() {
        let yaml = r"
name: foo
dependencies:
  - bar
  - baz
files:
  - src/*.c
  - lib/**/*.so
excluded_files:
  - src/test_*.c
";
        let manifest = Manifest::from_yaml(yaml, "spec").unwrap();
        assert_eq!(manifest.name, "foo");
        assert_eq!(manifest.dependencies, vec!["bar", "baz"]);
        assert_eq!(manifest.files, vec!["src/*.c", "lib/**/*.so"]);
        assert_eq!(manifest.excluded_files, vec!["src/test_*.c"]);
    }

    #[test]
    fn test_parse_minimal_spec_defaults_lists() {
        let manifest = Manifest::from_yaml("name: foo\n", "spec").unwrap();
        assert_eq!(manifest, Manifest::new("foo"));
    }

    #[test]
    fn test_parse_ignores_unknown_keys() {
        let yaml = "name: foo\nproperties: {}\n";
        assert!(Manifest::from_yaml(yaml, "spec").is_ok());
    }

    #[test]
    fn test_parse_preserves_file_order() {
        let yaml = "name: foo\nfiles: [bin/*, bin/special]\n";
        let manifest = Manifest::from_yaml(yaml, "spec").unwrap();
        assert_eq!(manifest.files, vec!["bin/*", "bin/special"]);
    }

    #[test]
    fn test_empty_name_is_invalid() {
        let err = Manifest::from_yaml("name: ''\n", "spec").unwrap_err();
        assert!(matches!(err, RelpackError::ManifestInvalid { .. }));
    }

    #[test]
    fn test_missing_name_fails_to_parse() {
        let err = Manifest::from_yaml("files: [a]\n", "spec").unwrap_err();
        assert!(matches!(err, RelpackError::ManifestParseFailed { .. }));
    }

    #[test]
    fn test_empty_pattern_is_invalid() {
        let err = Manifest::from_yaml("name: foo\nfiles: ['']\n", "spec").unwrap_err();
        assert!(matches!(err, RelpackError::ManifestInvalid { .. }));
    }

    #[test]
    fn test_malformed_yaml() {
        let err = Manifest::from_yaml("name: [unclosed", "/pkg/spec").unwrap_err();
        assert!(matches!(err, RelpackError::ManifestParseFailed { ref path, .. } if path == "/pkg/spec"));
    }

    #[test]
    fn test_yaml_source_reads_file() {
        let temp = TempDir::new().unwrap();
        let spec = temp.path().join("spec");
        std::fs::write(&spec, "name: foo\nfiles: [a.c]\n").unwrap();

        let manifest = YamlManifestSource.parse(&spec).unwrap();
        assert_eq!(manifest.name, "foo");
        assert_eq!(manifest.files, vec!["a.c"]);
    }

    #[test]
    fn test_yaml_source_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = YamlManifestSource.parse(&temp.path().join("spec")).unwrap_err();
        assert!(matches!(err, RelpackError::ManifestNotFound { .. }));
    }
}
