// ECDICT dictionary lookups using Turso/libsql
//
// Provides the two resolver lookups over the `stardict` table: exact
// case-insensitive headword, and the precomputed `sw` (stripped word) key.

use std::path::Path;

use async_trait::async_trait;
use libsql::{params, Row, Value};

use super::client::{TursoClient, TursoError};
use super::schema::{ensure_lookup_indexes, require_tables};
use crate::dictionary::{
    DictionaryBackend, DictionaryError, DictionaryRecord, FrequencyTags, InflectionTable,
};

const RECORD_COLUMNS: &str =
    "word, phonetic, translation, definition, pos, collins, oxford, tag, bnc, frq, exchange, detail";

/// Dictionary backend over an ECDICT stardict.db
pub struct StardictDictionary {
    client: TursoClient,
}

impl StardictDictionary {
    /// Open the dictionary at `path`, verify it and add lookup indexes.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, TursoError> {
        let client = TursoClient::open(path).await?;
        Self::from_client(client).await
    }

    pub async fn from_client(client: TursoClient) -> Result<Self, TursoError> {
        require_tables(&client, &["stardict"]).await?;
        ensure_lookup_indexes(&client).await;
        crate::info!("Using dictionary {:?}", client.path());
        Ok(Self { client })
    }

    async fn find_one(
        &self,
        filter: &str,
        value: &str,
    ) -> Result<Option<DictionaryRecord>, TursoError> {
        let sql = format!("SELECT {RECORD_COLUMNS} FROM stardict WHERE {filter} LIMIT 1");
        let mut rows = self.client.query(&sql, params![value.to_string()]).await?;

        match rows
            .next()
            .await
            .map_err(|e| TursoError::Query(e.to_string()))?
        {
            Some(row) => row_to_record(&row).map(Some),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl DictionaryBackend for StardictDictionary {
    async fn find_exact(&self, query: &str) -> Result<Option<DictionaryRecord>, DictionaryError> {
        self.find_one("LOWER(word) = LOWER(?1)", query)
            .await
            .map_err(|e| DictionaryError::Storage(e.to_string()))
    }

    async fn find_normalized(
        &self,
        key: &str,
    ) -> Result<Option<DictionaryRecord>, DictionaryError> {
        self.find_one("sw = ?1", key)
            .await
            .map_err(|e| DictionaryError::Storage(e.to_string()))
    }
}

/// Map one `stardict` row to a record.
///
/// Only the headword is mandatory. Optional columns are read leniently: a
/// value of the wrong type or an empty string counts as absent.
fn row_to_record(row: &Row) -> Result<DictionaryRecord, TursoError> {
    let value = |idx: i32| row.get_value(idx).unwrap_or(Value::Null);

    let headword = text(value(0))
        .ok_or_else(|| TursoError::Schema("stardict row without a headword".into()))?;

    let frequency_tags = FrequencyTags {
        collins_stars: positive(value(5)).and_then(|n| u8::try_from(n).ok()),
        is_oxford_core: positive(value(6)).is_some(),
        bnc_rank: positive(value(8)).and_then(|n| u32::try_from(n).ok()),
        freq_rank: positive(value(9)).and_then(|n| u32::try_from(n).ok()),
        tag: text(value(7)),
    };

    Ok(DictionaryRecord {
        headword,
        phonetic: text(value(1)),
        translation: text(value(2)),
        definition: text(value(3)),
        part_of_speech: text(value(4)),
        frequency_tags,
        inflections: text(value(10))
            .map(|exchange| InflectionTable::parse(&exchange))
            .unwrap_or_default(),
        note: text(value(11)),
    })
}

fn text(value: Value) -> Option<String> {
    match value {
        Value::Text(s) => Some(s.trim().to_string()).filter(|s| !s.is_empty()),
        Value::Integer(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Integer > 0, accepting numeric text; 0 and NULL mean "not set" in ECDICT.
fn positive(value: Value) -> Option<i64> {
    let n = match value {
        Value::Integer(n) => n,
        Value::Real(f) => f as i64,
        Value::Text(s) => s.trim().parse().ok()?,
        _ => return None,
    };
    (n > 0).then_some(n)
}

#[cfg(test)]
#[path = "stardict_test.rs"]
mod tests;
