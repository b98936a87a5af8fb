use crate::error::TranslationError;
use crate::i18n::LanguageSpec;
use async_trait::async_trait;
use std::sync::Arc;

/// The translation capability: turn one string from `source` into `target`.
///
/// Implementations may fail; callers decide how to recover.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source: &LanguageSpec,
        target: &LanguageSpec,
    ) -> Result<String, TranslationError>;
}

#[async_trait]
impl<T: Translator + ?Sized> Translator for Arc<T> {
    async fn translate(
        &self,
        text: &str,
        source: &LanguageSpec,
        target: &LanguageSpec,
    ) -> Result<String, TranslationError> {
        (**self).translate(text, source, target).await
    }
}

#[async_trait]
impl<T: Translator + ?Sized> Translator for Box<T> {
    async fn translate(
        &self,
        text: &str,
        source: &LanguageSpec,
        target: &LanguageSpec,
    ) -> Result<String, TranslationError> {
        (**self).translate(text, source, target).await
    }
}
