// Shared fixtures for unit tests: fake backends and on-disk SQLite databases

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tempfile::TempDir;

use crate::dictionary::{
    normalize_key, DictionaryBackend, DictionaryError, DictionaryRecord, MemoryDictionary,
};
use crate::translation::{GlossProvider, TranslationError};
use crate::turso::{TursoClient, KINDLE_TABLES, STARDICT_TABLE};

/// In-memory backend that counts how often each lookup reaches storage
pub struct CountingBackend {
    inner: MemoryDictionary,
    exact: AtomicUsize,
    normalized: AtomicUsize,
}

impl CountingBackend {
    pub fn new(records: Vec<DictionaryRecord>) -> Self {
        Self {
            inner: MemoryDictionary::new(records),
            exact: AtomicUsize::new(0),
            normalized: AtomicUsize::new(0),
        }
    }

    pub fn exact_calls(&self) -> usize {
        self.exact.load(Ordering::SeqCst)
    }

    pub fn normalized_calls(&self) -> usize {
        self.normalized.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DictionaryBackend for CountingBackend {
    async fn find_exact(&self, query: &str) -> Result<Option<DictionaryRecord>, DictionaryError> {
        self.exact.fetch_add(1, Ordering::SeqCst);
        self.inner.find_exact(query).await
    }

    async fn find_normalized(
        &self,
        key: &str,
    ) -> Result<Option<DictionaryRecord>, DictionaryError> {
        self.normalized.fetch_add(1, Ordering::SeqCst);
        self.inner.find_normalized(key).await
    }
}

/// Backend whose storage is always broken
pub struct FailingBackend;

#[async_trait]
impl DictionaryBackend for FailingBackend {
    async fn find_exact(&self, _query: &str) -> Result<Option<DictionaryRecord>, DictionaryError> {
        Err(DictionaryError::Storage("database disk image is malformed".into()))
    }

    async fn find_normalized(
        &self,
        _key: &str,
    ) -> Result<Option<DictionaryRecord>, DictionaryError> {
        Err(DictionaryError::Storage("database disk image is malformed".into()))
    }
}

/// Gloss provider that records its calls and replies from a fixed script
pub struct ScriptedGloss {
    reply: Result<String, TranslationError>,
    calls: Mutex<Vec<(String, String)>>,
}

impl ScriptedGloss {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: TranslationError) -> Self {
        Self {
            reply: Err(error),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GlossProvider for ScriptedGloss {
    async fn gloss(&self, word: &str, sentence: &str) -> Result<String, TranslationError> {
        self.calls
            .lock()
            .unwrap()
            .push((word.to_string(), sentence.to_string()));
        self.reply.clone()
    }
}

/// One `stardict` row for fixtures
pub struct StardictRow {
    pub word: &'static str,
    pub phonetic: Option<&'static str>,
    pub translation: Option<&'static str>,
    pub definition: Option<&'static str>,
    pub pos: Option<&'static str>,
    pub collins: i64,
    pub oxford: i64,
    pub tag: Option<&'static str>,
    pub bnc: i64,
    pub frq: i64,
    pub exchange: Option<&'static str>,
    pub detail: Option<&'static str>,
}

impl StardictRow {
    /// Row with only headword and exchange
    pub fn bare(word: &'static str, exchange: Option<&'static str>) -> Self {
        Self {
            word,
            phonetic: None,
            translation: None,
            definition: None,
            pos: None,
            collins: 0,
            oxford: 0,
            tag: None,
            bnc: 0,
            frq: 0,
            exchange,
            detail: None,
        }
    }
}

/// Write a stardict.db with `rows` into a fresh temp dir.
pub async fn stardict_fixture(rows: &[StardictRow]) -> (PathBuf, TempDir) {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let path = temp.path().join("stardict.db");
    let client = TursoClient::create(&path)
        .await
        .expect("Failed to create dictionary");
    client
        .execute(STARDICT_TABLE, ())
        .await
        .expect("Failed to create stardict table");

    for row in rows {
        client
            .execute(
                r#"INSERT INTO stardict
                   (word, sw, phonetic, translation, definition, pos, collins, oxford, tag, bnc, frq, exchange, detail)
                   VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)"#,
                libsql::params![
                    row.word,
                    normalize_key(row.word),
                    row.phonetic,
                    row.translation,
                    row.definition,
                    row.pos,
                    row.collins,
                    row.oxford,
                    row.tag,
                    row.bnc,
                    row.frq,
                    row.exchange,
                    row.detail
                ],
            )
            .await
            .expect("Failed to insert stardict row");
    }
    (path, temp)
}

/// One `WORDS` row for fixtures
pub struct WordRow {
    pub id: &'static str,
    pub word: &'static str,
    pub stem: Option<&'static str>,
    pub timestamp: i64,
}

/// One `LOOKUPS` row for fixtures
pub struct LookupRow {
    pub word_key: &'static str,
    pub usage: &'static str,
    pub timestamp: i64,
}

/// Write a Kindle vocab.db with `words` and `lookups` into a fresh temp dir.
pub async fn vocab_fixture(words: &[WordRow], lookups: &[LookupRow]) -> (PathBuf, TempDir) {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let path = temp.path().join("vocab.db");
    let client = TursoClient::create(&path)
        .await
        .expect("Failed to create vocab db");
    for statement in KINDLE_TABLES {
        client
            .execute(statement, ())
            .await
            .expect("Failed to create Kindle tables");
    }

    for w in words {
        client
            .execute(
                "INSERT INTO WORDS (id, word, stem, lang, timestamp) VALUES (?1, ?2, ?3, 'en', ?4)",
                libsql::params![w.id, w.word, w.stem, w.timestamp],
            )
            .await
            .expect("Failed to insert word");
    }
    for (n, l) in lookups.iter().enumerate() {
        client
            .execute(
                "INSERT INTO LOOKUPS (id, word_key, usage, timestamp) VALUES (?1, ?2, ?3, ?4)",
                libsql::params![format!("lookup-{n}"), l.word_key, l.usage, l.timestamp],
            )
            .await
            .expect("Failed to insert lookup");
    }
    (path, temp)
}
