// Thin libsql wrapper shared by the dictionary and vocabulary stores

use std::path::{Path, PathBuf};

use libsql::params::IntoParams;
use libsql::{Builder, Connection, Database, Rows};

/// Error types for database access
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TursoError {
    /// The database file does not exist
    #[error("Database file not found: {0:?}")]
    MissingSource(PathBuf),
    /// The file exists but libsql could not open it
    #[error("Failed to open database: {0}")]
    Open(String),
    /// A statement failed
    #[error("Query failed: {0}")]
    Query(String),
    /// The file is a database, but not the expected kind
    #[error("Unexpected database schema: {0}")]
    Schema(String),
}

/// A single local SQLite connection
pub struct TursoClient {
    /// Keeps the database handle alive for the connection's lifetime
    _db: Database,
    conn: Connection,
    path: PathBuf,
}

impl TursoClient {
    /// Open an existing database file.
    ///
    /// Unlike a plain libsql open, a missing file is an error rather than a
    /// fresh empty database.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, TursoError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(TursoError::MissingSource(path.to_path_buf()));
        }
        Self::connect(path).await
    }

    /// Open or create a database file (used to build fixtures).
    pub async fn create(path: impl AsRef<Path>) -> Result<Self, TursoError> {
        Self::connect(path.as_ref()).await
    }

    async fn connect(path: &Path) -> Result<Self, TursoError> {
        crate::debug!("Opening database {:?}", path);
        let db = Builder::new_local(path)
            .build()
            .await
            .map_err(|e| TursoError::Open(e.to_string()))?;
        let conn = db.connect().map_err(|e| TursoError::Open(e.to_string()))?;
        Ok(Self {
            _db: db,
            conn,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Execute a statement, returning the number of affected rows.
    pub async fn execute(&self, sql: &str, params: impl IntoParams) -> Result<u64, TursoError> {
        self.conn
            .execute(sql, params)
            .await
            .map_err(|e| TursoError::Query(e.to_string()))
    }

    /// Run a query and return its rows.
    pub async fn query(&self, sql: &str, params: impl IntoParams) -> Result<Rows, TursoError> {
        self.conn
            .query(sql, params)
            .await
            .map_err(|e| TursoError::Query(e.to_string()))
    }

    /// Whether a table named `name` exists.
    pub async fn table_exists(&self, name: &str) -> Result<bool, TursoError> {
        let mut rows = self
            .query(
                "SELECT name FROM sqlite_master WHERE type='table' AND name = ?1",
                libsql::params![name.to_string()],
            )
            .await?;

        Ok(rows
            .next()
            .await
            .map_err(|e| TursoError::Query(e.to_string()))?
            .is_some())
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
