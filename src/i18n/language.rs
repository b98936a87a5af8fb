//! Language type: an immutable (code, display name) pair.

use std::fmt;

/// A language the catalogs are kept in.
///
/// The code doubles as the catalog file stem (`vi` -> `vi.json`) and as the
/// destination code handed to the translation backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageSpec {
    /// Language code (e.g., "vi", "zh_CN")
    code: String,

    /// English display name (e.g., "Vietnamese")
    name: String,
}

impl LanguageSpec {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    /// The canonical source language.
    pub fn english() -> Self {
        Self::new("en", "English")
    }

    /// Get the language code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Get the English display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the catalog file holding this language.
    pub fn file_name(&self) -> String {
        format!("{}.json", self.code)
    }
}

impl fmt::Display for LanguageSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}
