//! Language metadata and translation quality checks.
//!
//! # Architecture
//!
//! - `language`: the `LanguageSpec` (code, display name) value type
//! - `registry`: the `LanguageCatalog` of target languages a run covers
//! - `validator`: placeholder preservation checks for translated leaves
//!
//! # Example
//!
//! ```rust,ignore
//! use locale_sync::i18n::{LanguageCatalog, LanguageSpec};
//!
//! let catalog = LanguageCatalog::with_default_targets(LanguageSpec::english());
//! let vietnamese = catalog.require("vi")?;
//! ```

mod language;
mod registry;
mod validator;

pub use language::LanguageSpec;
pub use registry::{parse_targets, LanguageCatalog};
pub use validator::{PlaceholderValidator, ValidationReport};
