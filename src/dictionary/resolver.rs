// Lemma resolver - maps an arbitrary surface query to a dictionary record
//
// Lookup order: exact case-insensitive headword, then the normalized
// (alphanumeric-only, lowercased) key. Every outcome, hits and misses alike,
// is cached by the lowercased query for the lifetime of the resolver.

use std::collections::HashMap;

use super::{DictionaryBackend, DictionaryError, DictionaryRecord};

/// Normalized lookup key: alphanumeric characters only, lowercased.
///
/// Matches how ECDICT computes its `sw` column, so "co-operate" and
/// "Co operate" both become "cooperate".
pub fn normalize_key(query: &str) -> String {
    query
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Display form for a lookup: the root-tagged inflection when the record
/// has one, otherwise `query` unchanged.
pub fn derive_canonical_form(record: Option<&DictionaryRecord>, query: &str) -> String {
    record
        .and_then(|r| r.inflections.root())
        .map(str::to_string)
        .unwrap_or_else(|| query.to_string())
}

/// Resolves queries against a [`DictionaryBackend`] with a per-run cache.
///
/// One resolver is owned by one pipeline run; dropping it discards the cache.
pub struct LemmaResolver<B: DictionaryBackend> {
    backend: B,
    /// Lowercased query -> resolution (None = not found)
    cache: HashMap<String, Option<DictionaryRecord>>,
}

impl<B: DictionaryBackend> LemmaResolver<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            cache: HashMap::new(),
        }
    }

    /// Resolve `query` to a record, or `Ok(None)` when nothing matches.
    ///
    /// Storage errors are returned as-is and are not cached; the caller is
    /// expected to abort the run.
    pub async fn resolve(
        &mut self,
        query: &str,
    ) -> Result<Option<DictionaryRecord>, DictionaryError> {
        let query = query.trim();
        let cache_key = query.to_lowercase();
        if cache_key.is_empty() {
            return Ok(None);
        }

        if let Some(cached) = self.cache.get(&cache_key) {
            crate::trace!("Resolver cache hit for '{}'", cache_key);
            return Ok(cached.clone());
        }

        let mut record = self.backend.find_exact(query).await?;

        if record.is_none() {
            let key = normalize_key(query);
            if !key.is_empty() {
                record = self.backend.find_normalized(&key).await?;
                if let Some(ref r) = record {
                    crate::debug!(
                        "Resolved '{}' via normalized key '{}' to '{}'",
                        query,
                        key,
                        r.headword
                    );
                }
            }
        }

        if record.is_none() {
            crate::debug!("No dictionary entry for '{}'", query);
        }

        self.cache.insert(cache_key, record.clone());
        Ok(record)
    }

    /// Number of distinct queries resolved so far
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

#[cfg(test)]
#[path = "resolver_test.rs"]
mod tests;
