// Translation module - optional gloss of a word in its example sentence

mod client;

use async_trait::async_trait;

pub use client::{build_request_body, extract_content, strip_tags, ChatGlossClient};

/// Error types for gloss requests
///
/// None of these abort a run: the pipeline logs them and leaves the gloss out.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TranslationError {
    /// No API key configured
    #[error("Translation service is not configured")]
    NotConfigured,
    /// Transport failure or timeout
    #[error("Translation request failed: {0}")]
    Request(String),
    /// Non-success HTTP status
    #[error("Translation service returned status {status}: {message}")]
    Status { status: u16, message: String },
    /// Response body did not have the expected shape
    #[error("Malformed translation response: {0}")]
    Malformed(String),
}

/// Provider of a free-text gloss for `word` as used in `sentence`.
#[async_trait]
pub trait GlossProvider: Send + Sync {
    async fn gloss(&self, word: &str, sentence: &str) -> Result<String, TranslationError>;
}
