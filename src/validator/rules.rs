//! Individual specification checks
//!
//! Each rule looks at one aspect of the spec and reports through the
//! [`Reporter`]. A rule returns `Err` only when the reporter is violent and
//! a fatal was raised, so `?` stops the run at that point.

use super::reporter::Reporter;
use crate::error::Result;
use crate::models::Specification;
use lazy_static::lazy_static;
use regex::Regex;

pub const MAX_NAME_LENGTH: usize = 45;
pub const MAX_DESCRIPTION_LENGTH: usize = 132;

pub type Rule = fn(&Specification, &mut Reporter<'_>) -> Result<()>;

/// Rules run by `validate`, in order.
pub const RULES: &[(&str, Rule)] = &[
    ("name", check_name),
    ("version", check_version),
    ("icons", check_icons),
    ("description", check_description),
    ("ui surfaces", check_ui_collisions),
];

lazy_static! {
    static ref INVALID_VERSION_CHAR: Regex = Regex::new(r"[^0-9.]").unwrap();
}

pub fn check_name(spec: &Specification, reporter: &mut Reporter<'_>) -> Result<()> {
    match &spec.name {
        None => reporter.fatal("No name provided"),
        Some(name) if name.chars().count() > MAX_NAME_LENGTH => reporter.fatal("Name too long"),
        Some(_) => Ok(()),
    }
}

pub fn check_version(spec: &Specification, reporter: &mut Reporter<'_>) -> Result<()> {
    match &spec.version {
        None => reporter.fatal("No version provided"),
        Some(version) if INVALID_VERSION_CHAR.is_match(version) => {
            reporter.fatal("Invalid characters in version")
        }
        Some(_) => Ok(()),
    }
}

pub fn check_icons(spec: &Specification, reporter: &mut Reporter<'_>) -> Result<()> {
    if spec.icons.is_empty() {
        reporter.warn("No icons provided");
    }
    Ok(())
}

pub fn check_description(spec: &Specification, reporter: &mut Reporter<'_>) -> Result<()> {
    match &spec.description {
        Some(description) if description.chars().count() > MAX_DESCRIPTION_LENGTH => {
            reporter.fatal("Description too long")
        }
        _ => Ok(()),
    }
}

pub fn check_ui_collisions(spec: &Specification, reporter: &mut Reporter<'_>) -> Result<()> {
    if spec.ui_surface_count() > 1 {
        return reporter
            .fatal("Only one of browser_action, page_action, and packaged app can be specified");
    }
    Ok(())
}

/// Background page and background scripts are mutually exclusive.
///
/// Not part of [`RULES`]: enabling it would fail specs that currently pass.
pub fn check_background_collisions(
    spec: &Specification,
    reporter: &mut Reporter<'_>,
) -> Result<()> {
    if spec.background_page.is_some() && !spec.background_scripts.is_empty() {
        return reporter.fatal("You cannot use both background pages and background scripts");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActionSpec, PackagedApp, Severity};
    use test_case::test_case;

    fn run(rule: Rule, spec: &Specification) -> Vec<String> {
        let mut reporter = Reporter::new(false);
        rule(spec, &mut reporter).unwrap();
        reporter
            .messages()
            .iter()
            .map(|m| m.message.clone())
            .collect()
    }

    #[test_case("1.0" ; "two parts")]
    #[test_case("2.3.4" ; "three parts")]
    #[test_case("10" ; "single number")]
    fn test_valid_versions(version: &str) {
        let spec = Specification::new("Test", version);
        assert!(run(check_version, &spec).is_empty());
    }

    #[test_case("1.0-beta" ; "pre-release suffix")]
    #[test_case("1.0.a" ; "letter component")]
    #[test_case("v1" ; "leading letter")]
    #[test_case("1 0" ; "whitespace")]
    fn test_invalid_versions(version: &str) {
        let spec = Specification::new("Test", version);
        assert_eq!(run(check_version, &spec), vec!["Invalid characters in version"]);
    }

    #[test]
    fn test_missing_name_reports_once() {
        let spec = Specification::default();
        assert_eq!(run(check_name, &spec), vec!["No name provided"]);
    }

    #[test]
    fn test_name_length_boundary() {
        let spec = Specification::new("a".repeat(MAX_NAME_LENGTH), "1.0");
        assert!(run(check_name, &spec).is_empty());

        let spec = Specification::new("a".repeat(MAX_NAME_LENGTH + 1), "1.0");
        assert_eq!(run(check_name, &spec), vec!["Name too long"]);
    }

    #[test]
    fn test_name_length_counts_characters() {
        let spec = Specification::new("é".repeat(MAX_NAME_LENGTH), "1.0");
        assert!(run(check_name, &spec).is_empty());
    }

    #[test]
    fn test_description_length() {
        let spec = Specification::new("Test", "1.0").with_description("d".repeat(132));
        assert!(run(check_description, &spec).is_empty());

        let spec = Specification::new("Test", "1.0").with_description("d".repeat(133));
        assert_eq!(run(check_description, &spec), vec!["Description too long"]);

        assert!(run(check_description, &Specification::new("Test", "1.0")).is_empty());
    }

    #[test]
    fn test_empty_icons_is_warning() {
        let mut reporter = Reporter::new(true);
        check_icons(&Specification::new("Test", "1.0"), &mut reporter).unwrap();
        assert_eq!(reporter.of_severity(Severity::Warn), vec!["No icons provided"]);
        assert!(reporter.of_severity(Severity::Fatal).is_empty());
    }

    #[test_case(false, false, false, 0 ; "none")]
    #[test_case(true, false, false, 0 ; "browser action only")]
    #[test_case(true, true, false, 1 ; "two surfaces")]
    #[test_case(true, true, true, 1 ; "all three surfaces")]
    fn test_ui_collisions(browser: bool, page: bool, app: bool, expected: usize) {
        let mut spec = Specification::new("Test", "1.0");
        if browser {
            spec = spec.with_browser_action(ActionSpec::default());
        }
        if page {
            spec = spec.with_page_action(ActionSpec::default());
        }
        if app {
            spec = spec.with_packaged_app(PackagedApp::default());
        }
        assert_eq!(run(check_ui_collisions, &spec).len(), expected);
    }

    #[test]
    fn test_background_collisions() {
        let mut spec = Specification::new("Test", "1.0");
        spec.background_page = Some("background.html".to_string());
        assert!(run(check_background_collisions, &spec).is_empty());

        spec.background_scripts.push("background.js".to_string());
        assert_eq!(
            run(check_background_collisions, &spec),
            vec!["You cannot use both background pages and background scripts"]
        );
    }
}
