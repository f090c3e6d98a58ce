//! Browser extension specification validator
//!
//! Checks an extension's build specification (name, version, icons, UI
//! surfaces, scripts and resources) for missing required fields, mutually
//! exclusive settings and, given the compiled output directory, files that
//! are referenced but were never built.

pub mod error;
pub mod models;
pub mod parser;
pub mod report;
pub mod validator;

pub use error::SpecError;
pub use models::{Severity, Specification, ValidationMessage};
pub use validator::{validate_specification, SpecificationValidator, ValidatorOptions};

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Resolve a build directory the way the CLI does: relative paths are taken
/// from the directory holding the spec file.
pub fn resolve_build_directory(spec_path: &Path, build_dir: &Path) -> PathBuf {
    if build_dir.is_absolute() {
        return build_dir.to_path_buf();
    }
    spec_path
        .parent()
        .map(|parent| parent.join(build_dir))
        .unwrap_or_else(|| build_dir.to_path_buf())
}

/// Load a spec file and validate it violently against `build_dir`.
pub fn validate_file(spec_path: &Path, build_dir: Option<&Path>) -> Result<bool> {
    let spec = parser::parse_specification_from_file(spec_path)
        .with_context(|| format!("Failed to load {}", spec_path.display()))?;
    let out = build_dir.map(|dir| resolve_build_directory(spec_path, dir));

    Ok(validate_specification(&spec, out.as_deref())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_build_directory() {
        assert_eq!(
            resolve_build_directory(Path::new("project/Extspec.json5"), Path::new("build")),
            PathBuf::from("project/build")
        );
        assert_eq!(
            resolve_build_directory(Path::new("Extspec.json5"), Path::new("build")),
            PathBuf::from("build")
        );
    }
}
