// Turso/libsql storage - the ECDICT dictionary and the Kindle vocabulary database
//
// Both are existing SQLite files owned by other tools. This module only reads
// them, apart from adding two lookup indexes to the dictionary.

mod client;
mod schema;
mod stardict;
mod vocab;

pub use client::{TursoClient, TursoError};
pub use schema::{ensure_lookup_indexes, KINDLE_TABLES, STARDICT_TABLE};
pub use stardict::StardictDictionary;
pub use vocab::KindleVocabulary;
