//! Specification file loading

use crate::error::{Result, SpecError};
use crate::models::Specification;
use std::path::{Path, PathBuf};

/// File names looked up, in order, when only a directory is given.
pub const DEFAULT_SPEC_FILES: &[&str] = &["Extspec.json5", "Extspec.json"];

/// Parse a specification from raw bytes
pub fn parse_specification(content: &[u8]) -> Result<Specification> {
    let content_str = std::str::from_utf8(content)?;
    parse_specification_from_str(content_str)
}

/// Parse a specification from a string (JSON5, so comments are allowed)
pub fn parse_specification_from_str(content: &str) -> Result<Specification> {
    Ok(json5::from_str(content)?)
}

/// Parse a specification from a file path
pub fn parse_specification_from_file(path: impl AsRef<Path>) -> Result<Specification> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(SpecError::SpecificationNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| SpecError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("Parsing specification from {}", path.display());
    json5::from_str(&content).map_err(|source| SpecError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Locate the default specification file inside `dir`
pub fn find_specification(dir: &Path) -> Result<PathBuf> {
    DEFAULT_SPEC_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| SpecError::SpecificationNotFound(dir.join(DEFAULT_SPEC_FILES[0])))
}
