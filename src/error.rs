//! Error types shared by the loader and the validator

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpecError {
    /// Raised by a violent validator on the first fatal problem.
    #[error("invalid specification: {0}")]
    InvalidSpecification(String),

    #[error("specification not found at {}", .0.display())]
    SpecificationNotFound(PathBuf),

    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("specification is not valid UTF-8")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("malformed specification: {0}")]
    Syntax(#[from] json5::Error),

    #[error("failed to parse {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: json5::Error,
    },
}

impl SpecError {
    pub fn is_invalid_specification(&self) -> bool {
        matches!(self, SpecError::InvalidSpecification(_))
    }
}

pub type Result<T, E = SpecError> = std::result::Result<T, E>;
