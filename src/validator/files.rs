//! Build directory validation

use super::reporter::Reporter;
use crate::error::Result;
use crate::models::Specification;
use std::path::Path;

/// Check that every file the spec points to exists under `out`.
pub fn check_file_presence(
    spec: &Specification,
    out: &Path,
    reporter: &mut Reporter<'_>,
) -> Result<()> {
    for reference in spec.file_references() {
        if !out.join(reference.path).exists() {
            reporter.fatal(format!(
                "{} does not exist at '{}'",
                reference.what, reference.path
            ))?;
        }
    }

    Ok(())
}
