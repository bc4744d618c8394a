// Kindle vocabulary extraction using Turso/libsql
//
// Reads WORDS joined with LOOKUPS, most recently touched word first, and
// folds the per-lookup rows into one VocabularyItem per word.

use std::path::Path;

use async_trait::async_trait;
use indexmap::IndexMap;

use super::client::{TursoClient, TursoError};
use super::schema::require_tables;
use crate::vocabulary::{VocabularyError, VocabularyItem, VocabularySource};

const EXTRACT_QUERY: &str = r#"SELECT w.word, w.stem, l.usage
    FROM WORDS w
    LEFT JOIN LOOKUPS l ON w.id = l.word_key
    ORDER BY w.timestamp DESC, l.timestamp DESC"#;

/// Vocabulary source over a Kindle vocab.db
pub struct KindleVocabulary {
    client: TursoClient,
}

/// Rows for one word while folding
#[derive(Default)]
struct Pending {
    stem: Option<String>,
    usages: Vec<String>,
}

impl KindleVocabulary {
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, TursoError> {
        let client = TursoClient::open(path).await?;
        require_tables(&client, &["WORDS", "LOOKUPS"]).await?;
        crate::info!("Using Kindle vocabulary {:?}", client.path());
        Ok(Self { client })
    }

    async fn read_grouped(&self) -> Result<IndexMap<String, Pending>, TursoError> {
        let mut rows = self.client.query(EXTRACT_QUERY, ()).await?;
        let mut grouped: IndexMap<String, Pending> = IndexMap::new();

        while let Some(row) = rows
            .next()
            .await
            .map_err(|e| TursoError::Query(e.to_string()))?
        {
            let word: Option<String> = row.get(0).map_err(|e| TursoError::Query(e.to_string()))?;
            let Some(word) = word else {
                crate::warn!("Skipping vocabulary row without a word");
                continue;
            };
            // Stem and usage are optional; a bad value is dropped, not fatal
            let stem: Option<String> = row.get(1).unwrap_or(None);
            let usage: Option<String> = row.get(2).unwrap_or(None);

            let pending = grouped.entry(word).or_default();
            if pending.stem.is_none() {
                pending.stem = stem;
            }
            if let Some(usage) = usage {
                pending.usages.push(usage);
            }
        }

        Ok(grouped)
    }
}

#[async_trait]
impl VocabularySource for KindleVocabulary {
    async fn fetch_items(
        &self,
        limit: Option<usize>,
    ) -> Result<Vec<VocabularyItem>, VocabularyError> {
        let grouped = self
            .read_grouped()
            .await
            .map_err(|e| VocabularyError::Storage(e.to_string()))?;

        let mut items = Vec::with_capacity(grouped.len());
        for (word, pending) in grouped {
            if limit.is_some_and(|n| items.len() >= n) {
                break;
            }
            match VocabularyItem::new(&word, pending.stem.as_deref(), &pending.usages) {
                Ok(item) => items.push(item),
                Err(e) => crate::warn!("Skipping vocabulary entry '{}': {}", word, e),
            }
        }

        crate::info!("Extracted {} vocabulary items", items.len());
        Ok(items)
    }
}

#[cfg(test)]
#[path = "vocab_test.rs"]
mod tests;
