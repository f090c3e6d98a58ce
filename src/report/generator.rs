//! Plain text and JSON renderings of a validation run

use crate::models::{Severity, ValidationMessage};
use crate::validator::SpecificationValidator;
use serde::Serialize;

/// `"WARN: <msg>"` or `"FATAL: <msg>"`
pub fn format_message(severity: Severity, message: &str) -> String {
    format!("{}: {}", severity.label(), message)
}

/// One-line outcome of a run: `"All OK!"` or the error and warning counts.
pub fn generate_summary(validator: &SpecificationValidator<'_>) -> String {
    let warnings = validator.warnings().len();
    let errors = validator.errors().len();

    if warnings == 0 && errors == 0 {
        return "All OK!".to_string();
    }
    format!("{} error(s), {} warning(s)", errors, warnings)
}

#[derive(Serialize)]
struct JsonReport<'a> {
    name: Option<&'a str>,
    version: Option<&'a str>,
    ok: bool,
    warnings: Vec<&'a str>,
    errors: Vec<&'a str>,
    messages: &'a [ValidationMessage],
}

pub fn generate_json_report(validator: &SpecificationValidator<'_>) -> serde_json::Result<String> {
    let spec = validator.specification();
    let report = JsonReport {
        name: spec.name.as_deref(),
        version: spec.version.as_deref(),
        ok: validator.messages().is_empty(),
        warnings: validator.warnings(),
        errors: validator.errors(),
        messages: validator.messages(),
    };
    serde_json::to_string_pretty(&report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Specification;

    #[test]
    fn test_format_message() {
        assert_eq!(
            format_message(Severity::Warn, "No icons provided"),
            "WARN: No icons provided"
        );
        assert_eq!(
            format_message(Severity::Fatal, "Name too long"),
            "FATAL: Name too long"
        );
    }

    #[test]
    fn test_summary_all_ok() {
        let spec = Specification::new("Test", "1.0").with_icon("16", "i.png");
        let mut validator = SpecificationValidator::new(&spec, None);
        validator.validate().unwrap();
        assert_eq!(generate_summary(&validator), "All OK!");
    }

    #[test]
    fn test_summary_counts() {
        let spec = Specification {
            version: Some("1.0".to_string()),
            description: Some("d".repeat(200)),
            ..Specification::default()
        };
        let mut validator = SpecificationValidator::new(&spec, None);
        validator.validate().unwrap();
        assert_eq!(generate_summary(&validator), "2 error(s), 1 warning(s)");
    }

    #[test]
    fn test_json_report() {
        let spec = Specification::new("Test", "1.0");
        let mut validator = SpecificationValidator::new(&spec, None);
        validator.validate().unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&generate_json_report(&validator).unwrap()).unwrap();
        assert_eq!(json["ok"], false);
        assert_eq!(json["warnings"][0], "No icons provided");
        assert_eq!(json["messages"][0]["severity"], "warn");
        assert_eq!(json["name"], "Test");
    }
}
