use crate::error::SyncError;
use crate::i18n::{LanguageCatalog, LanguageSpec};
use crate::merge::{merge, missing_keys};
use crate::store::{LocaleStore, TargetState};
use crate::translate::{TranslationReport, Translator, ValueTranslator};
use crate::tree::{flatten, KeyPath, Tree};
use std::time::Duration;
use tracing::info;

/// What one Load → Merge → Save cycle did.
#[derive(Debug, Clone)]
pub struct LanguageRun {
    pub translated: bool,
    pub new_keys: usize,
    pub target_state: TargetState,
    pub report: TranslationReport,
}

/// Runs the Load → Merge → Save cycle for target languages.
pub struct LanguageProcessor {
    catalog: LanguageCatalog,
    store: LocaleStore,
    translator: Box<dyn Translator>,
    leaf_delay: Duration,
}

impl LanguageProcessor {
    pub fn new(
        catalog: LanguageCatalog,
        store: LocaleStore,
        translator: Box<dyn Translator>,
        leaf_delay: Duration,
    ) -> Self {
        Self {
            catalog,
            store,
            translator,
            leaf_delay,
        }
    }

    pub fn catalog(&self) -> &LanguageCatalog {
        &self.catalog
    }

    pub fn store(&self) -> &LocaleStore {
        &self.store
    }

    /// Process one language by code. Returns whether anything was translated.
    ///
    /// An unknown code fails before any file is touched.
    pub async fn process(&self, code: &str) -> Result<bool, SyncError> {
        let language = self.catalog.require(code)?;
        let source = self.store.load_source()?;
        let run = self.process_language(language, &source).await?;
        Ok(run.translated)
    }

    /// Merge an already loaded source into one target and save the result.
    ///
    /// The target is saved even when nothing was new, so every file ends up
    /// in canonical form.
    pub async fn process_language(
        &self,
        language: &LanguageSpec,
        source: &Tree,
    ) -> Result<LanguageRun, SyncError> {
        info!("Processing {}", language);

        let target = self.store.load_target(language)?;
        let translator = ValueTranslator::new(
            self.translator.as_ref(),
            self.catalog.source(),
            self.leaf_delay,
        );
        let result = merge(source, &target.tree, language, &translator).await;

        self.store.save_target(language, &result.tree, target.state)?;

        info!(
            "{}: done ({} new keys, {} leaves translated, {} fallbacks)",
            language,
            result.new_keys.len(),
            result.report.translated,
            result.report.fallback
        );

        Ok(LanguageRun {
            translated: result.translated,
            new_keys: result.new_keys.len(),
            target_state: target.state,
            report: result.report,
        })
    }
}

/// Key statistics for one target catalog against the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub language: LanguageSpec,
    pub source_keys: usize,
    pub target_keys: usize,
    /// Sorted key-paths the target still lacks
    pub missing: Vec<KeyPath>,
}

/// Compare one target catalog against the source without writing anything.
pub fn check_missing(
    catalog: &LanguageCatalog,
    store: &LocaleStore,
    code: &str,
) -> Result<CheckReport, SyncError> {
    let language = catalog.require(code)?;
    let source = store.load_source()?;
    let target = store.load_target(language)?;

    Ok(CheckReport {
        language: language.clone(),
        source_keys: flatten(&source).len(),
        target_keys: flatten(&target.tree).len(),
        missing: missing_keys(&source, &target.tree),
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageStatus {
    pub language: LanguageSpec,
    pub file_exists: bool,
}

/// Every configured target language, in catalog order, with whether its
/// file is present.
pub fn list_languages(catalog: &LanguageCatalog, store: &LocaleStore) -> Vec<LanguageStatus> {
    catalog
        .targets()
        .iter()
        .map(|language| LanguageStatus {
            language: language.clone(),
            file_exists: store.exists(language),
        })
        .collect()
}
