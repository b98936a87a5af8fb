use crate::i18n::{parse_targets, LanguageCatalog, LanguageSpec};
use crate::store::LocaleStore;
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    // Catalog files
    pub locale_dir: PathBuf,
    pub source_language: LanguageSpec,
    pub target_languages: Vec<LanguageSpec>,

    // OpenAI
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_api_url: String,

    // Pacing
    pub leaf_delay: Duration,
    pub language_delay: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let source_code = std::env::var("SOURCE_LANGUAGE").unwrap_or_else(|_| "en".to_string());
        let source_language = if source_code == "en" {
            LanguageSpec::english()
        } else {
            LanguageSpec::new(source_code.clone(), source_code)
        };

        let target_languages = match std::env::var("TARGET_LANGUAGES") {
            Ok(list) => parse_targets(&list, &source_language)
                .context("TARGET_LANGUAGES is invalid")?,
            Err(_) => LanguageCatalog::with_default_targets(source_language.clone())
                .targets()
                .to_vec(),
        };

        Ok(Self {
            // Catalog files
            locale_dir: std::env::var("LOCALE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("assets/translations")),
            source_language,
            target_languages,

            // OpenAI - the key is only required once a translation run starts
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            openai_model: std::env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            openai_api_url: std::env::var("OPENAI_API_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1/chat/completions".to_string()),

            // Pacing
            leaf_delay: duration_ms("LEAF_DELAY_MS", 100),
            language_delay: duration_ms("LANGUAGE_DELAY_MS", 1000),
        })
    }

    pub fn catalog(&self) -> LanguageCatalog {
        LanguageCatalog::new(self.source_language.clone(), self.target_languages.clone())
    }

    pub fn store(&self) -> LocaleStore {
        LocaleStore::new(self.locale_dir.clone(), self.source_language.clone())
    }
}

fn duration_ms(var: &str, default: u64) -> Duration {
    let millis = std::env::var(var)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default);
    Duration::from_millis(millis)
}
