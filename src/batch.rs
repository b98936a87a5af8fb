use crate::error::SyncError;
use crate::i18n::LanguageSpec;
use crate::processor::LanguageProcessor;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageOutcome {
    Translated,
    UpToDate,
    Failed(String),
}

/// Outcome of every language in a batch, in processing order.
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    pub outcomes: Vec<(LanguageSpec, LanguageOutcome)>,
}

impl BatchSummary {
    pub fn translated(&self) -> usize {
        self.count(|outcome| matches!(outcome, LanguageOutcome::Translated))
    }

    pub fn up_to_date(&self) -> usize {
        self.count(|outcome| matches!(outcome, LanguageOutcome::UpToDate))
    }

    pub fn failed(&self) -> usize {
        self.count(|outcome| matches!(outcome, LanguageOutcome::Failed(_)))
    }

    fn count(&self, predicate: impl Fn(&LanguageOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|(_, outcome)| predicate(outcome)).count()
    }

    pub fn log(&self) {
        info!(
            "Batch complete: {} translated, {} up to date, {} failed",
            self.translated(),
            self.up_to_date(),
            self.failed()
        );
        for (language, outcome) in &self.outcomes {
            if let LanguageOutcome::Failed(message) = outcome {
                error!("  {}: {}", language, message);
            }
        }
    }
}

/// Runs the processor over every configured language, one after another.
pub struct BatchRunner {
    processor: LanguageProcessor,
    language_delay: Duration,
}

impl BatchRunner {
    pub fn new(processor: LanguageProcessor, language_delay: Duration) -> Self {
        Self {
            processor,
            language_delay,
        }
    }

    /// Process all target languages in catalog order.
    ///
    /// The source is loaded once; if that fails nothing is processed. A
    /// failing language is logged and recorded, and the batch moves on.
    /// After a language that translated something, the runner pauses before
    /// the next one.
    pub async fn process_all(&self) -> Result<BatchSummary, SyncError> {
        let source = self.processor.store().load_source()?;
        let targets = self.processor.catalog().targets();

        info!("Synchronizing {} languages", targets.len());

        let mut summary = BatchSummary::default();
        for (index, language) in targets.iter().enumerate() {
            let outcome = match self.processor.process_language(language, &source).await {
                Ok(run) if run.translated => LanguageOutcome::Translated,
                Ok(_) => LanguageOutcome::UpToDate,
                Err(e) => {
                    error!("Failed to process {}: {}", language, e);
                    LanguageOutcome::Failed(e.to_string())
                }
            };

            let is_last = index + 1 == targets.len();
            if outcome == LanguageOutcome::Translated && !is_last && !self.language_delay.is_zero() {
                sleep(self.language_delay).await;
            }

            summary.outcomes.push((language.clone(), outcome));
        }

        summary.log();
        Ok(summary)
    }
}
