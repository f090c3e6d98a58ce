//! Specification validation
//!
//! [`SpecificationValidator`] runs a fixed sequence of rules over a
//! [`Specification`] and, when given the compiled output directory, checks
//! that every referenced file is there. Problems are either warnings or
//! fatals. In violent mode the first fatal stops the run with
//! [`SpecError::InvalidSpecification`](crate::error::SpecError::InvalidSpecification).

pub mod files;
pub mod reporter;
pub mod rules;

pub use reporter::Reporter;

use crate::error::Result;
use crate::models::{Severity, Specification, ValidationMessage};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatorOptions {
    /// Fail on the first fatal instead of collecting everything.
    pub violent: bool,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self { violent: false }
    }
}

pub struct SpecificationValidator<'a> {
    spec: &'a Specification,
    out: Option<PathBuf>,
    reporter: Reporter<'a>,
}

impl<'a> SpecificationValidator<'a> {
    /// Create a collect-all validator. Files are only checked when
    /// `output_directory` is given.
    pub fn new(spec: &'a Specification, output_directory: Option<&Path>) -> Self {
        Self::with_options(spec, output_directory, ValidatorOptions::default())
    }

    pub fn with_options(
        spec: &'a Specification,
        output_directory: Option<&Path>,
        options: ValidatorOptions,
    ) -> Self {
        Self {
            spec,
            out: output_directory.map(Path::to_path_buf),
            reporter: Reporter::new(options.violent),
        }
    }

    pub fn violent(mut self, violent: bool) -> Self {
        self.reporter.set_violent(violent);
        self
    }

    /// Register a callback that receives each message as it is produced.
    pub fn on_message<F>(mut self, callback: F) -> Self
    where
        F: FnMut(Severity, &str) + 'a,
    {
        self.reporter.set_sink(Box::new(callback));
        self
    }

    /// Run every rule, then the file sweep if there is an output directory.
    ///
    /// Returns `Ok(true)` only when nothing at all was reported. A violent
    /// validator returns `Err` at the first fatal and skips the rest.
    pub fn validate(&mut self) -> Result<bool> {
        self.reporter.clear();

        for (name, rule) in rules::RULES {
            tracing::debug!("Running {} check", name);
            rule(self.spec, &mut self.reporter)?;
        }

        if let Some(out) = &self.out {
            tracing::debug!("Checking referenced files under {}", out.display());
            files::check_file_presence(self.spec, out, &mut self.reporter)?;
        }

        tracing::info!(
            "Validation finished: {} warning(s), {} error(s)",
            self.warnings().len(),
            self.errors().len()
        );

        Ok(self.reporter.is_clean())
    }

    /// Background page vs background scripts check. Not run by [`validate`].
    ///
    /// [`validate`]: SpecificationValidator::validate
    pub fn check_background_collisions(&mut self) -> Result<()> {
        rules::check_background_collisions(self.spec, &mut self.reporter)
    }

    pub fn specification(&self) -> &Specification {
        self.spec
    }

    pub fn output_directory(&self) -> Option<&Path> {
        self.out.as_deref()
    }

    pub fn is_violent(&self) -> bool {
        self.reporter.is_violent()
    }

    pub fn warnings(&self) -> Vec<&str> {
        self.reporter.of_severity(Severity::Warn)
    }

    pub fn errors(&self) -> Vec<&str> {
        self.reporter.of_severity(Severity::Fatal)
    }

    /// All messages in the order they were produced.
    pub fn messages(&self) -> &[ValidationMessage] {
        self.reporter.messages()
    }
}

/// Validate violently: any fatal comes back as
/// [`SpecError::InvalidSpecification`](crate::error::SpecError::InvalidSpecification).
pub fn validate_specification(
    spec: &Specification,
    output_directory: Option<&Path>,
) -> Result<bool> {
    SpecificationValidator::new(spec, output_directory)
        .violent(true)
        .validate()
}
