// Dictionary module - headword records, variant expansion, lemma resolution and highlighting

mod expander;
mod highlight;
mod memory;
mod record;
mod resolver;

use async_trait::async_trait;

pub use expander::{expand, expand_inverse, VariantClosure};
pub use highlight::{HighlightedExcerpt, Highlighter};
pub use memory::MemoryDictionary;
pub use record::{DictionaryRecord, FrequencyTags, InflectionKind, InflectionTable};
pub use resolver::{derive_canonical_form, normalize_key, LemmaResolver};

/// Error types for dictionary operations
///
/// A lookup miss is not an error; backends return `Ok(None)`. Anything in
/// here means the datastore itself is unusable and the run must stop.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DictionaryError {
    /// The underlying datastore failed (unreadable, corrupt, bad schema)
    #[error("Dictionary storage error: {0}")]
    Storage(String),
}

/// Backend trait for headword lookups.
///
/// Implementations provide the two lookups the resolver needs. The primary
/// implementation is TursoClient over an ECDICT `stardict` database.
#[async_trait]
pub trait DictionaryBackend: Send + Sync {
    /// Exact, case-insensitive match of `query` against stored headwords.
    async fn find_exact(&self, query: &str) -> Result<Option<DictionaryRecord>, DictionaryError>;

    /// Match on the precomputed normalized key (alphanumeric-only, lowercased).
    async fn find_normalized(
        &self,
        key: &str,
    ) -> Result<Option<DictionaryRecord>, DictionaryError>;
}
