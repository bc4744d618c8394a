// Vocabulary module - lookup items produced by the extraction collaborator

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Maximum usage sentences kept per item
pub const MAX_USAGES: usize = 3;

/// Error types for vocabulary extraction
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VocabularyError {
    /// The vocabulary datastore failed
    #[error("Vocabulary storage error: {0}")]
    Storage(String),
    /// Surface form is empty once trimmed and de-prefixed
    #[error("Vocabulary item has an empty surface form")]
    EmptySurface,
}

/// One looked-up word with up to [`MAX_USAGES`] example sentences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyItem {
    surface: String,
    hinted_stem: Option<String>,
    /// Most recent first
    usages: Vec<String>,
}

impl VocabularyItem {
    /// Build an item, stripping any `lang:` prefix from surface and stem.
    ///
    /// Blank usages are dropped and at most [`MAX_USAGES`] are kept. A blank
    /// stem becomes `None`.
    pub fn new(
        surface: &str,
        hinted_stem: Option<&str>,
        usages: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Result<Self, VocabularyError> {
        let surface = strip_lang_prefix(surface).trim().to_string();
        if surface.is_empty() {
            return Err(VocabularyError::EmptySurface);
        }

        let hinted_stem = hinted_stem
            .map(|s| strip_lang_prefix(s).trim().to_string())
            .filter(|s| !s.is_empty());

        let usages = usages
            .into_iter()
            .map(|u| u.as_ref().trim().to_string())
            .filter(|u| !u.is_empty())
            .take(MAX_USAGES)
            .collect();

        Ok(Self {
            surface,
            hinted_stem,
            usages,
        })
    }

    pub fn surface(&self) -> &str {
        &self.surface
    }

    pub fn hinted_stem(&self) -> Option<&str> {
        self.hinted_stem.as_deref()
    }

    pub fn usages(&self) -> &[String] {
        &self.usages
    }

    /// The term to look up: the hinted stem when present, else the surface.
    pub fn query_term(&self) -> &str {
        self.hinted_stem().unwrap_or(&self.surface)
    }

    /// First non-empty usage
    pub fn first_usage(&self) -> Option<&str> {
        self.usages
            .iter()
            .map(String::as_str)
            .find(|u| !u.trim().is_empty())
    }
}

/// Strip a leading `lang:` namespace such as `en:` or `en-GB:`.
///
/// Only a purely alphabetic (optionally hyphenated) prefix counts, so text
/// like "re:mix" loses "re:" but "10:30" is left alone.
pub fn strip_lang_prefix(word: &str) -> &str {
    match word.split_once(':') {
        Some((prefix, rest))
            if !prefix.is_empty()
                && prefix.chars().all(|c| c.is_ascii_alphabetic() || c == '-') =>
        {
            rest
        }
        _ => word,
    }
}

/// Source trait for vocabulary items.
///
/// The primary implementation is TursoClient over a Kindle `vocab.db`.
#[async_trait]
pub trait VocabularySource: Send + Sync {
    /// Items ordered most-recently-touched first, capped at `limit` if given.
    async fn fetch_items(
        &self,
        limit: Option<usize>,
    ) -> Result<Vec<VocabularyItem>, VocabularyError>;
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
