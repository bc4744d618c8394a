// Expected schemas of the two external databases and the dictionary index setup

use super::client::{TursoClient, TursoError};

/// ECDICT `stardict` table as shipped in stardict.db
pub const STARDICT_TABLE: &str = r#"CREATE TABLE IF NOT EXISTS stardict (
    id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL UNIQUE,
    word VARCHAR(64) COLLATE NOCASE NOT NULL UNIQUE,
    sw VARCHAR(64) COLLATE NOCASE NOT NULL,
    phonetic VARCHAR(64),
    definition TEXT,
    translation TEXT,
    pos VARCHAR(16),
    collins INTEGER DEFAULT(0),
    oxford INTEGER DEFAULT(0),
    tag VARCHAR(64),
    bnc INTEGER DEFAULT(NULL),
    frq INTEGER DEFAULT(NULL),
    exchange TEXT,
    detail TEXT,
    audio TEXT
)"#;

/// Kindle `vocab.db` tables used by extraction
pub const KINDLE_TABLES: &[&str] = &[
    r#"CREATE TABLE IF NOT EXISTS WORDS (
        id TEXT PRIMARY KEY NOT NULL UNIQUE,
        word TEXT,
        stem TEXT,
        lang TEXT,
        category INTEGER DEFAULT 0,
        timestamp INTEGER DEFAULT 0,
        profileid TEXT
    )"#,
    r#"CREATE TABLE IF NOT EXISTS LOOKUPS (
        id TEXT PRIMARY KEY NOT NULL,
        word_key TEXT,
        book_key TEXT,
        dict_key TEXT,
        pos TEXT,
        usage TEXT,
        timestamp INTEGER DEFAULT 0
    )"#,
];

/// Index statements that speed up the two resolver lookups
const LOOKUP_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_word_lower ON stardict(LOWER(word))",
    "CREATE INDEX IF NOT EXISTS idx_sw ON stardict(sw)",
];

/// Fail unless every table in `tables` exists.
pub(crate) async fn require_tables(
    client: &TursoClient,
    tables: &[&str],
) -> Result<(), TursoError> {
    for table in tables {
        if !client.table_exists(table).await? {
            return Err(TursoError::Schema(format!(
                "{:?} has no '{}' table",
                client.path(),
                table
            )));
        }
    }
    Ok(())
}

/// Create the lookup indexes on the dictionary.
///
/// Best effort: a read-only or locked file just means slower lookups, so
/// failures are logged and otherwise ignored.
pub async fn ensure_lookup_indexes(client: &TursoClient) {
    for statement in LOOKUP_INDEXES {
        if let Err(e) = client.execute(statement, ()).await {
            crate::debug!("Could not create dictionary index ({}): {}", statement, e);
        }
    }
}

#[cfg(test)]
#[path = "schema_test.rs"]
mod tests;
