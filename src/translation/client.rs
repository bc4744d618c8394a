// Chat-completions gloss client (OpenAI-compatible endpoint)

use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use serde_json::{json, Value};

use super::{GlossProvider, TranslationError};
use crate::util::{compile_pattern, TranslationSettings};

const SYSTEM_PROMPT: &str = "You are an assistant fluent in English who explains what a word \
means in a specific example sentence. Keep answers short and accurate.";

static TAG_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| compile_pattern(r"<.*?>"));

/// Remove HTML tags from `text`.
pub fn strip_tags(text: &str) -> String {
    match TAG_PATTERN.as_ref() {
        Some(tag) => tag.replace_all(text, "").into_owned(),
        None => text.to_string(),
    }
}

/// JSON body for a gloss request.
pub fn build_request_body(model: &str, word: &str, sentence: &str) -> Value {
    let sentence = strip_tags(sentence);
    json!({
        "model": model,
        "messages": [
            { "role": "system", "content": SYSTEM_PROMPT },
            {
                "role": "user",
                "content": format!(
                    "Explain the meaning of the word '{word}' in the example sentence, \
                     then translate the sentence into Chinese.\n\
                     [Meaning]: a concise explanation. [Translation]: the sentence in Chinese.\n\
                     Sentence: {sentence}"
                )
            }
        ]
    })
}

/// Pull `choices[0].message.content` out of a chat-completions response.
pub fn extract_content(body: &Value) -> Result<String, TranslationError> {
    body.get("choices")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(Value::as_str)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| TranslationError::Malformed("missing choices[0].message.content".into()))
}

fn error_message(body: &Value) -> String {
    body.get("error")
        .and_then(|e| e.get("message"))
        .and_then(Value::as_str)
        .unwrap_or("unknown error")
        .to_string()
}

/// HTTP gloss client. One request per call, no retries.
pub struct ChatGlossClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl ChatGlossClient {
    /// Build a client from settings; fails with `NotConfigured` without a key.
    pub fn from_settings(settings: &TranslationSettings) -> Result<Self, TranslationError> {
        let api_key = settings
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or(TranslationError::NotConfigured)?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| TranslationError::Request(e.to_string()))?;

        Ok(Self {
            http,
            api_url: settings.api_url.clone(),
            api_key,
            model: settings.model.clone(),
        })
    }
}

#[async_trait]
impl GlossProvider for ChatGlossClient {
    async fn gloss(&self, word: &str, sentence: &str) -> Result<String, TranslationError> {
        if word.trim().is_empty() || sentence.trim().is_empty() {
            return Err(TranslationError::Malformed("empty word or sentence".into()));
        }

        crate::debug!("Requesting gloss for '{}'", word);
        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&build_request_body(&self.model, word, sentence))
            .send()
            .await
            .map_err(|e| TranslationError::Request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| TranslationError::Request(e.to_string()))?;
        let body: Result<Value, _> = serde_json::from_str(&text);

        if status != reqwest::StatusCode::OK {
            return Err(TranslationError::Status {
                status: status.as_u16(),
                message: body.map(|b| error_message(&b)).unwrap_or(text),
            });
        }

        let body = body.map_err(|e| TranslationError::Malformed(e.to_string()))?;
        extract_content(&body)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
