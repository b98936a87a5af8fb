use crate::error::TranslationError;
use crate::i18n::{LanguageSpec, PlaceholderValidator};
use crate::translate::Translator;
use crate::tree::{Tree, Value};
use std::time::Duration;
use tokio::time::sleep;
use tracing::warn;

/// What happened to one string leaf.
#[derive(Debug)]
pub enum LeafOutcome {
    /// The backend returned a translation
    Translated(String),
    /// Empty or whitespace-only text, kept as is without a backend call
    Blank,
    /// The backend failed; the source text is kept
    Fallback(TranslationError),
}

impl LeafOutcome {
    /// The text to store for a leaf whose source text is `original`.
    pub fn into_text(self, original: &str) -> String {
        match self {
            LeafOutcome::Translated(text) => text,
            LeafOutcome::Blank | LeafOutcome::Fallback(_) => original.to_string(),
        }
    }
}

/// Per-leaf tally for one translated value or a whole merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslationReport {
    pub translated: usize,
    pub blank: usize,
    pub fallback: usize,
}

impl TranslationReport {
    pub fn record(&mut self, outcome: &LeafOutcome) {
        match outcome {
            LeafOutcome::Translated(_) => self.translated += 1,
            LeafOutcome::Blank => self.blank += 1,
            LeafOutcome::Fallback(_) => self.fallback += 1,
        }
    }

    pub fn absorb(&mut self, other: TranslationReport) {
        self.translated += other.translated;
        self.blank += other.blank;
        self.fallback += other.fallback;
    }

    /// Number of backend calls that were attempted.
    pub fn calls(&self) -> usize {
        self.translated + self.fallback
    }
}

/// Applies a [`Translator`] to every string leaf inside a value, keeping the
/// value's shape.
///
/// Leaves are translated strictly one after another, in depth-first order,
/// with a fixed pause before each backend call.
pub struct ValueTranslator<'a> {
    translator: &'a dyn Translator,
    source: &'a LanguageSpec,
    leaf_delay: Duration,
}

impl<'a> ValueTranslator<'a> {
    pub fn new(translator: &'a dyn Translator, source: &'a LanguageSpec, leaf_delay: Duration) -> Self {
        Self {
            translator,
            source,
            leaf_delay,
        }
    }

    /// Translate every leaf of `value` into `target`.
    ///
    /// Never fails: a leaf whose translation fails keeps its source text and
    /// is counted as a fallback in the returned report.
    pub async fn translate_value(
        &self,
        value: &Value,
        target: &LanguageSpec,
    ) -> (Value, TranslationReport) {
        let mut leaves = Vec::new();
        collect_leaves(value, &mut leaves);

        let mut report = TranslationReport::default();
        let mut resolved = Vec::with_capacity(leaves.len());
        for text in leaves {
            let outcome = self.translate_leaf(text, target).await;
            report.record(&outcome);
            resolved.push(outcome.into_text(text));
        }

        let translated = rebuild(value, &mut resolved.into_iter());
        (translated, report)
    }

    /// Translate one string leaf.
    pub async fn translate_leaf(&self, text: &str, target: &LanguageSpec) -> LeafOutcome {
        if text.trim().is_empty() {
            return LeafOutcome::Blank;
        }

        if !self.leaf_delay.is_zero() {
            sleep(self.leaf_delay).await;
        }

        match self.translator.translate(text, self.source, target).await {
            Ok(translated) => {
                let validation = PlaceholderValidator::validate(text, &translated);
                if !validation.errors.is_empty() {
                    warn!(
                        "Placeholder errors translating '{}' to {}: {:?}",
                        preview(text),
                        target,
                        validation.errors
                    );
                }
                if !validation.warnings.is_empty() {
                    warn!(
                        "Placeholder warnings translating '{}' to {}: {:?}",
                        preview(text),
                        target,
                        validation.warnings
                    );
                }
                LeafOutcome::Translated(translated)
            }
            Err(error) => {
                warn!(
                    "Failed to translate '{}' to {}, keeping source text: {}",
                    preview(text),
                    target,
                    error
                );
                LeafOutcome::Fallback(error)
            }
        }
    }
}

fn collect_leaves<'v>(value: &'v Value, leaves: &mut Vec<&'v str>) {
    match value {
        Value::Leaf(text) => leaves.push(text),
        Value::List(items) => items.iter().for_each(|item| collect_leaves(item, leaves)),
        Value::Node(tree) => tree.values().for_each(|child| collect_leaves(child, leaves)),
        Value::Literal(_) => {}
    }
}

/// Rebuild `value`, taking leaf texts from `resolved` in the order
/// `collect_leaves` produced them.
fn rebuild<I: Iterator<Item = String>>(value: &Value, resolved: &mut I) -> Value {
    match value {
        Value::Leaf(original) => Value::Leaf(resolved.next().unwrap_or_else(|| original.clone())),
        Value::List(items) => Value::List(items.iter().map(|item| rebuild(item, resolved)).collect()),
        Value::Node(tree) => Value::Node(
            tree.iter()
                .map(|(key, child)| (key.clone(), rebuild(child, resolved)))
                .collect::<Tree>(),
        ),
        Value::Literal(literal) => Value::Literal(literal.clone()),
    }
}

fn preview(text: &str) -> String {
    const MAX_CHARS: usize = 50;
    if text.chars().count() <= MAX_CHARS {
        text.to_string()
    } else {
        format!("{}...", text.chars().take(MAX_CHARS).collect::<String>())
    }
}
