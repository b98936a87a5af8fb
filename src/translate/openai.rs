use crate::config::Config;
use crate::error::TranslationError;
use crate::i18n::LanguageSpec;
use crate::retry::{with_retry_if, RetryConfig};
use crate::translate::Translator;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// OpenAI Chat Completion request for translation
#[derive(Debug, Serialize)]
struct TranslationRequest {
    model: String,
    messages: Vec<Message>,
    max_completion_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reasoning_effort: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

/// Check if a model is a reasoning model that doesn't support temperature
fn is_reasoning_model(model: &str) -> bool {
    model.starts_with("gpt-5")
        || model.starts_with("o1")
        || model.starts_with("o3")
        || model.starts_with("o4")
}

/// Build the system prompt for translating one catalog string
fn build_translation_system_prompt(source_language: &str, target_language: &str) -> String {
    format!(
        r#"You are a professional software localizer. Translate the user's message from {} to {}. The message is a single string from an application's user interface.

## Translation Rules

### DO NOT translate or alter:
- Placeholders in braces (e.g., {{name}}, {{{{count}}}})
- printf-style specifiers (e.g., %s, %d, %1$s)
- HTML or markup tags (e.g., <b>, </b>, <br/>)
- Linked message references (e.g., @:common.save)
- URLs, email addresses, product and brand names

### Output:
- Reply with the translated string ONLY
- No quotes, explanations, notes or alternatives
- Keep the same punctuation style and capitalization conventions of {}
- Keep it as concise as the original, it has to fit the same UI element"#,
        source_language, target_language, target_language
    )
}

/// Translation backend speaking the OpenAI chat-completions protocol.
pub struct OpenAiTranslator {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
    retry: RetryConfig,
}

impl OpenAiTranslator {
    pub fn new(
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.into(),
            api_key: api_key.into(),
            model: model.into(),
            retry: RetryConfig::translation_call(),
        }
    }

    /// Build the backend from configuration. Fails when no API key is set.
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config
            .openai_api_key
            .clone()
            .context("OPENAI_API_KEY not set")?;
        Ok(Self::new(&config.openai_api_url, api_key, &config.openai_model))
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    fn build_request(&self, text: &str, source: &LanguageSpec, target: &LanguageSpec) -> TranslationRequest {
        // Reasoning models need higher token limits and don't support temperature
        let is_reasoning = is_reasoning_model(&self.model);

        TranslationRequest {
            model: self.model.clone(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: build_translation_system_prompt(source.name(), target.name()),
                },
                Message {
                    role: "user".to_string(),
                    content: text.to_string(),
                },
            ],
            max_completion_tokens: if is_reasoning { 4000 } else { 1024 },
            temperature: if is_reasoning { None } else { Some(0.3) },
            reasoning_effort: is_reasoning.then(|| "low".to_string()),
        }
    }

    async fn send(&self, request: &TranslationRequest) -> Result<String, TranslationError> {
        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| TranslationError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            return Err(TranslationError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| TranslationError::InvalidResponse(e.to_string()))?;

        chat_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(TranslationError::EmptyResponse)
    }
}

#[async_trait]
impl Translator for OpenAiTranslator {
    async fn translate(
        &self,
        text: &str,
        source: &LanguageSpec,
        target: &LanguageSpec,
    ) -> Result<String, TranslationError> {
        if source.code() == target.code() {
            return Ok(text.to_string());
        }

        let request = self.build_request(text, source, target);
        let translated = with_retry_if(
            &self.retry,
            &format!("Translation to {}", target.name()),
            || self.send(&request),
            TranslationError::is_retryable,
        )
        .await?;

        Ok(restore_padding(text, translated.trim()))
    }
}

/// Models strip surrounding whitespace; put the source's back.
fn restore_padding(source: &str, translated: &str) -> String {
    let leading = &source[..source.len() - source.trim_start().len()];
    let trailing = &source[source.trim_end().len()..];
    format!("{}{}{}", leading, translated, trailing)
}
