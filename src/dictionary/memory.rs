// In-memory dictionary backend
//
// Holds a fixed set of records with both lookup indexes precomputed at
// construction: lowercased headword and normalized key.

use std::collections::HashMap;

use async_trait::async_trait;

use super::{normalize_key, DictionaryBackend, DictionaryError, DictionaryRecord};

#[derive(Debug, Clone, Default)]
pub struct MemoryDictionary {
    by_headword: HashMap<String, DictionaryRecord>,
    /// Normalized key -> lowercased headword; first record wins on collision
    by_normalized: HashMap<String, String>,
}

impl MemoryDictionary {
    pub fn new(records: impl IntoIterator<Item = DictionaryRecord>) -> Self {
        let mut dict = Self::default();
        for record in records {
            dict.insert(record);
        }
        dict
    }

    pub fn insert(&mut self, record: DictionaryRecord) {
        let headword = record.headword.to_lowercase();
        let key = normalize_key(&record.headword);
        if !key.is_empty() {
            self.by_normalized.entry(key).or_insert_with(|| headword.clone());
        }
        self.by_headword.insert(headword, record);
    }

    pub fn len(&self) -> usize {
        self.by_headword.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_headword.is_empty()
    }
}

#[async_trait]
impl DictionaryBackend for MemoryDictionary {
    async fn find_exact(&self, query: &str) -> Result<Option<DictionaryRecord>, DictionaryError> {
        Ok(self.by_headword.get(&query.to_lowercase()).cloned())
    }

    async fn find_normalized(
        &self,
        key: &str,
    ) -> Result<Option<DictionaryRecord>, DictionaryError> {
        Ok(self
            .by_normalized
            .get(key)
            .and_then(|headword| self.by_headword.get(headword))
            .cloned())
    }
}
