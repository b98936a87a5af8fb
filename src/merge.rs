//! Key-set diff and additive merge.
//!
//! A merge only ever inserts: every key-path the target held before keeps
//! its exact value, and key-paths that exist only in the target survive.

use crate::i18n::LanguageSpec;
use crate::translate::{TranslationReport, ValueTranslator};
use crate::tree::{flatten, get_path, set_path, KeyPath, Tree, Value};
use tracing::{info, warn};

/// Updated target catalog plus what the merge did to it.
#[derive(Debug, Clone)]
pub struct MergeResult {
    pub tree: Tree,
    /// True iff at least one backend call was made for a new key
    pub translated: bool,
    /// New key-paths in the order they were processed (lexicographic)
    pub new_keys: Vec<KeyPath>,
    pub report: TranslationReport,
}

/// Key-paths present in `source` but absent from `target`, sorted.
pub fn missing_keys(source: &Tree, target: &Tree) -> Vec<KeyPath> {
    let target_keys = flatten(target);
    flatten(source)
        .into_iter()
        .filter(|key| !target_keys.contains(key))
        .collect()
}

/// Merge `source` into a copy of `target`, translating only the values of
/// key-paths the target is missing.
pub async fn merge(
    source: &Tree,
    target: &Tree,
    language: &LanguageSpec,
    translator: &ValueTranslator<'_>,
) -> MergeResult {
    let source_keys = flatten(source);
    let target_keys = flatten(target);
    let new_keys: Vec<KeyPath> = source_keys.difference(&target_keys).cloned().collect();

    info!(
        "{}: {} keys in source, {} in target, {} new",
        language,
        source_keys.len(),
        target_keys.len(),
        new_keys.len()
    );

    let mut result = target.clone();
    let mut report = TranslationReport::default();

    if new_keys.is_empty() {
        info!("{}: no new keys to translate", language);
        return MergeResult {
            tree: result,
            translated: false,
            new_keys,
            report,
        };
    }

    for key in &new_keys {
        let Some(value) = get_path(source, key) else {
            warn!(
                "{}: skipping '{}', it cannot be read back from the source (keys containing '.' are not supported)",
                language, key
            );
            continue;
        };

        if conflicts_with_target(target, key) {
            warn!(
                "{}: skipping '{}', the target holds a different shape at this path",
                language, key
            );
            continue;
        }

        info!("{}: translating {}", language, key);
        let (translated, leaf_report) = translator.translate_value(value, language).await;
        report.absorb(leaf_report);
        set_path(&mut result, key, translated);
    }

    MergeResult {
        tree: result,
        translated: report.calls() > 0,
        new_keys,
        report,
    }
}

/// Whether writing at `key` would replace content the target already has:
/// either a node holding key-paths sits at `key` itself, or a terminal value
/// sits at one of its prefixes. Empty nodes hold nothing and may be replaced.
fn conflicts_with_target(target: &Tree, key: &str) -> bool {
    match get_path(target, key) {
        Some(Value::Node(node)) if flatten(node).is_empty() => {}
        Some(_) => return true,
        None => {}
    }

    key.match_indices('.').any(|(end, _)| {
        matches!(get_path(target, &key[..end]), Some(value) if !matches!(value, Value::Node(_)))
    })
}
