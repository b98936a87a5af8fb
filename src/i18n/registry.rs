//! Language catalog: the set of target languages a run operates on.
//!
//! The catalog is an ordinary value built from configuration and handed to
//! the processor and batch runner. Iteration order is the configured order.

use crate::error::SyncError;
use crate::i18n::LanguageSpec;
use anyhow::{bail, Result};

/// Source language plus the ordered list of target languages.
#[derive(Debug, Clone)]
pub struct LanguageCatalog {
    source: LanguageSpec,
    targets: Vec<LanguageSpec>,
}

impl LanguageCatalog {
    pub fn new(source: LanguageSpec, targets: Vec<LanguageSpec>) -> Self {
        Self { source, targets }
    }

    /// Catalog with the built-in target languages.
    pub fn with_default_targets(source: LanguageSpec) -> Self {
        Self::new(source, default_targets())
    }

    /// The canonical language every target is synchronized against.
    pub fn source(&self) -> &LanguageSpec {
        &self.source
    }

    /// Target languages in processing order.
    pub fn targets(&self) -> &[LanguageSpec] {
        &self.targets
    }

    /// Get a target language by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageSpec> {
        self.targets.iter().find(|lang| lang.code() == code)
    }

    /// Look up a target language, failing with `UnsupportedLanguage`.
    pub fn require(&self, code: &str) -> Result<&LanguageSpec, SyncError> {
        self.get_by_code(code)
            .ok_or_else(|| SyncError::UnsupportedLanguage {
                code: code.to_string(),
                available: self.codes().join(", "),
            })
    }

    /// All target codes in processing order.
    pub fn codes(&self) -> Vec<&str> {
        self.targets.iter().map(LanguageSpec::code).collect()
    }
}

/// Parse a `code=Name,code=Name` target list.
///
/// Codes must be unique and must differ from the source code, otherwise a
/// run would overwrite the source catalog.
pub fn parse_targets(list: &str, source: &LanguageSpec) -> Result<Vec<LanguageSpec>> {
    let mut targets: Vec<LanguageSpec> = Vec::new();

    for entry in list.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let Some((code, name)) = entry.split_once('=') else {
            bail!("Invalid language entry '{}': expected code=Name", entry);
        };
        let (code, name) = (code.trim(), name.trim());

        if code.is_empty() || name.is_empty() {
            bail!("Invalid language entry '{}': code and name are required", entry);
        }
        if code == source.code() {
            bail!("Target language '{}' is the source language", code);
        }
        if targets.iter().any(|t| t.code() == code) {
            bail!("Duplicate target language '{}'", code);
        }

        targets.push(LanguageSpec::new(code, name));
    }

    if targets.is_empty() {
        bail!("Target language list is empty");
    }
    Ok(targets)
}

/// Built-in target languages.
fn default_targets() -> Vec<LanguageSpec> {
    [
        ("vi", "Vietnamese"),
        ("de", "German"),
        ("es", "Spanish"),
        ("fr", "French"),
        ("ja", "Japanese"),
        ("ko", "Korean"),
        ("zh_CN", "Chinese (Simplified)"),
        ("zh_TW", "Chinese (Traditional)"),
    ]
    .into_iter()
    .map(|(code, name)| LanguageSpec::new(code, name))
    .collect()
}
