//! Guarding special file names against glob selection

use crate::error::{Result, package as package_error};

use super::SPECIAL_FILES;
use super::files::FileSet;

/// Fail if `files` still selects `packaging` or `pre_packaging`.
///
/// Special files are always added on their own, so a glob match would give
/// the same relative path two identities.
pub fn check_special_files(files: &FileSet, package: &str) -> Result<()> {
    for special in SPECIAL_FILES {
        if files.contains_key(special) {
            return Err(package_error::naming_collision(special, package));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RelpackError;
    use crate::package::{FileRoot, PackageFile};
    use std::path::Path;

    fn file_set(relative: &[&str]) -> FileSet {
        relative
            .iter()
            .map(|rel| {
                let file = PackageFile::new(Path::new("/r/src").join(rel), Path::new("/r/src"), FileRoot::Src);
                (file.relative_path.clone(), file)
            })
            .collect()
    }

    #[test]
    fn test_accepts_ordinary_files() {
        assert!(check_special_files(&file_set(&["src/a.c", "lib/packaging"]), "foo").is_ok());
    }

    #[test]
    fn test_rejects_packaging() {
        let err = check_special_files(&file_set(&["packaging", "src/a.c"]), "foo").unwrap_err();
        assert!(
            matches!(err, RelpackError::NamingCollision { ref file, ref package } if file == "packaging" && package == "foo")
        );
    }

    #[test]
    fn test_rejects_pre_packaging() {
        let err = check_special_files(&file_set(&["pre_packaging"]), "foo").unwrap_err();
        assert!(matches!(err, RelpackError::NamingCollision { ref file, .. } if file == "pre_packaging"));
    }
}
