//! Translation quality validation module.
//!
//! Catalog strings carry tokens the application substitutes at runtime:
//! interpolation placeholders, printf-style specifiers, inline markup and
//! linked-message references. A backend that translates or drops one of
//! them produces a string that renders wrong, so every translated leaf is
//! checked against its source.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a translation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    /// Tokens present in the source but missing from the translation
    pub errors: Vec<String>,

    /// Tokens whose occurrence count changed
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

/// Validator for placeholder preservation.
pub struct PlaceholderValidator;

static BRACE_REGEX: OnceLock<Regex> = OnceLock::new();
static PRINTF_REGEX: OnceLock<Regex> = OnceLock::new();
static TAG_REGEX: OnceLock<Regex> = OnceLock::new();
static LINKED_REGEX: OnceLock<Regex> = OnceLock::new();

impl PlaceholderValidator {
    /// Validate that `translated` keeps every runtime token of `original`.
    ///
    /// Checked tokens:
    /// - `{name}` and `{{name}}` interpolation placeholders
    /// - `%s`, `%d`, `%1$s` printf specifiers
    /// - markup tags such as `<b>` / `</b>` (attributes ignored)
    /// - `@:linked.key` message references
    pub fn validate(original: &str, translated: &str) -> ValidationReport {
        let mut report = ValidationReport::new();
        let expected = Self::tokens(original);
        let actual = Self::tokens(translated);

        for (token, count) in &expected {
            match actual.get(token) {
                None => report
                    .errors
                    .push(format!("Missing token {} in translation", token)),
                Some(found) if found != count => report.warnings.push(format!(
                    "Token {} appears {} time(s) in source, {} in translation",
                    token, count, found
                )),
                Some(_) => {}
            }
        }

        for token in actual.keys().filter(|t| !expected.contains_key(*t)) {
            report
                .warnings
                .push(format!("Unexpected token {} in translation", token));
        }

        report
    }

    fn tokens(text: &str) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        let mut add = |token: String| *counts.entry(token).or_insert(0) += 1;

        Self::extract_braces(text).into_iter().for_each(&mut add);
        Self::extract_printf(text).into_iter().for_each(&mut add);
        Self::extract_tags(text).into_iter().for_each(&mut add);
        Self::extract_linked(text).into_iter().for_each(&mut add);

        counts
    }

    /// Extract `{name}` and `{{name}}` placeholders
    fn extract_braces(text: &str) -> Vec<String> {
        let regex = BRACE_REGEX.get_or_init(|| {
            Regex::new(r"\{\{\s*[^{}]+?\s*\}\}|\{[^{}]+\}").expect("valid placeholder regex")
        });

        regex.find_iter(text).map(|m| m.as_str().to_string()).collect()
    }

    /// Extract printf-style specifiers
    fn extract_printf(text: &str) -> Vec<String> {
        let regex = PRINTF_REGEX
            .get_or_init(|| Regex::new(r"%(?:\d+\$)?[sdif@]").expect("valid printf regex"));

        regex.find_iter(text).map(|m| m.as_str().to_string()).collect()
    }

    /// Extract markup tags, normalized to `<name>` / `</name>`
    fn extract_tags(text: &str) -> Vec<String> {
        let regex = TAG_REGEX.get_or_init(|| {
            Regex::new(r"<(/?)([a-zA-Z][a-zA-Z0-9]*)[^<>]*>").expect("valid tag regex")
        });

        regex
            .captures_iter(text)
            .map(|cap| format!("<{}{}>", &cap[1], &cap[2]))
            .collect()
    }

    /// Extract `@:key.path` linked-message references
    fn extract_linked(text: &str) -> Vec<String> {
        let regex = LINKED_REGEX
            .get_or_init(|| Regex::new(r"@:[A-Za-z0-9_.]*[A-Za-z0-9_]").expect("valid link regex"));

        regex.find_iter(text).map(|m| m.as_str().to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Extraction Tests ====================

    #[test]
    fn test_extract_braces() {
        let tokens = PlaceholderValidator::extract_braces("Hi {name}, you have {{ count }} items");
        assert_eq!(tokens, vec!["{name}", "{{ count }}"]);
    }

    #[test]
    fn test_extract_printf() {
        let tokens = PlaceholderValidator::extract_printf("%s uploaded %d files (%1$s)");
        assert_eq!(tokens, vec!["%s", "%d", "%1$s"]);
    }

    #[test]
    fn test_extract_printf_ignores_percentages() {
        assert!(PlaceholderValidator::extract_printf("100% done").is_empty());
    }

    #[test]
    fn test_extract_tags_ignores_attributes() {
        let tokens =
            PlaceholderValidator::extract_tags(r#"Read <a href="/terms">the terms</a> <br/>"#);
        assert_eq!(tokens, vec!["<a>", "</a>", "<br>"]);
    }

    #[test]
    fn test_extract_linked() {
        let tokens = PlaceholderValidator::extract_linked("See @:common.save.");
        assert_eq!(tokens, vec!["@:common.save"]);
    }

    #[test]
    fn test_extract_none() {
        assert!(PlaceholderValidator::tokens("Plain text").is_empty());
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_validate_clean_translation() {
        let report = PlaceholderValidator::validate(
            "Welcome, {name}! You have <b>%d</b> messages",
            "Chào mừng, {name}! Bạn có <b>%d</b> tin nhắn",
        );
        assert!(report.is_clean(), "{:?}", report);
    }

    #[test]
    fn test_validate_missing_placeholder_is_error() {
        let report = PlaceholderValidator::validate("Hello {name}", "Hallo {Name}");
        assert!(report.has_errors());
        assert!(report.errors[0].contains("{name}"));
        // the renamed token is reported as unexpected
        assert!(report.has_warnings());
    }

    #[test]
    fn test_validate_count_mismatch_is_warning() {
        let report = PlaceholderValidator::validate("{n} of {n}", "{n}");
        assert!(!report.has_errors());
        assert!(report.warnings[0].contains("2 time(s)"));
    }

    #[test]
    fn test_validate_reordered_tokens_are_fine() {
        let report = PlaceholderValidator::validate("%1$s sent %2$s", "%2$s wurde von %1$s gesendet");
        assert!(report.is_clean());
    }

    #[test]
    fn test_validation_report_new() {
        let report = ValidationReport::new();
        assert!(report.is_clean());
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
    }
}
