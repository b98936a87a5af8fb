//! Error taxonomy for catalog synchronization.
//!
//! Library code returns these typed errors; the binary wraps them in
//! `anyhow` at the edge. Leaf translation failures never surface as
//! `SyncError` - they are recovered into a fallback by the value translator.

use std::path::PathBuf;
use thiserror::Error;

/// Failure reading or writing one catalog file.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("catalog file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to access catalog file {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog file {} is not a valid JSON object: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode catalog for {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure of a single call into the translation backend.
#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("translation API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("failed to reach translation API: {0}")]
    Transport(String),

    #[error("failed to parse translation response: {0}")]
    InvalidResponse(String),

    #[error("translation response contained no choices")]
    EmptyResponse,
}

impl TranslationError {
    /// Rate limits (429), server errors (5xx) and transient transport or
    /// parse failures are retried. Other 4xx responses are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            TranslationError::Api { status, .. } => *status == 429 || *status >= 500,
            TranslationError::Transport(_)
            | TranslationError::InvalidResponse(_)
            | TranslationError::EmptyResponse => true,
        }
    }
}

/// Failure that aborts processing of one language (or the whole batch,
/// when the source catalog cannot be read).
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("unsupported language '{code}' (available: {available})")]
    UnsupportedLanguage { code: String, available: String },

    #[error("source catalog unavailable: {0}")]
    SourceUnavailable(#[source] CodecError),

    #[error("source catalog {} has no keys", path.display())]
    EmptySource { path: PathBuf },

    #[error("target catalog unreadable: {0}")]
    TargetUnreadable(#[source] CodecError),

    #[error("failed to save catalog: {0}")]
    Save(#[source] CodecError),
}
