//! Package shape errors

use std::path::Path;

use super::RelpackError;

/// Creates a missing build script error
pub fn missing_build_script(package: impl Into<String>, path: &Path) -> RelpackError {
    RelpackError::MissingBuildScript {
        package: package.into(),
        path: path.display().to_string(),
    }
}

/// Creates a special file naming collision error
pub fn naming_collision(file: impl Into<String>, package: impl Into<String>) -> RelpackError {
    RelpackError::NamingCollision {
        file: file.into(),
        package: package.into(),
    }
}
