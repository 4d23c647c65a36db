//! Document repository backing the durable stores.

use crate::db::error::DbError;
use crate::db::schema::{SCHEMA, SCHEMA_VERSION};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Arc, Mutex};

type Result<T> = std::result::Result<T, DbError>;

/// Durable key/value storage of whole serialized documents.
pub trait DocumentStore {
    fn load_document(&self, key: &str) -> Result<Option<String>>;
    fn save_document(&self, key: &str, body: &str) -> Result<()>;
}

/// Handle shared by every durable store of a process.
pub type SharedDocuments = Arc<Mutex<dyn DocumentStore + Send>>;

/// SQLite implementation of the document store.
pub struct SqliteDocumentStore {
    conn: Connection,
}

impl SqliteDocumentStore {
    /// Open database at path, creating if necessary.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let repo = Self { conn };
        repo.initialize()?;
        Ok(repo)
    }

    /// Open in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let repo = Self { conn };
        repo.initialize()?;
        Ok(repo)
    }

    /// Wrap into the shared handle the stores take.
    pub fn into_shared(self) -> SharedDocuments {
        Arc::new(Mutex::new(self))
    }

    fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA)?;
        self.conn.execute(
            "INSERT OR IGNORE INTO schema_version (version) VALUES (?1)",
            params![SCHEMA_VERSION],
        )?;
        Ok(())
    }

    pub fn schema_version(&self) -> Result<i32> {
        let version = self
            .conn
            .query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))?;
        Ok(version)
    }
}

impl DocumentStore for SqliteDocumentStore {
    fn load_document(&self, key: &str) -> Result<Option<String>> {
        let body = self
            .conn
            .query_row(
                "SELECT body FROM documents WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(body)
    }

    fn save_document(&self, key: &str, body: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO documents (key, body, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET body = excluded.body, updated_at = excluded.updated_at",
            params![key, body, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_document_is_none() {
        let repo = SqliteDocumentStore::open_in_memory().unwrap();
        assert_eq!(repo.load_document("word_attempts").unwrap(), None);
    }

    #[test]
    fn save_then_load() {
        let repo = SqliteDocumentStore::open_in_memory().unwrap();
        repo.save_document("word_attempts", r#"{"apple":{}}"#).unwrap();
        assert_eq!(
            repo.load_document("word_attempts").unwrap().as_deref(),
            Some(r#"{"apple":{}}"#)
        );
    }

    #[test]
    fn save_overwrites_existing_document() {
        let repo = SqliteDocumentStore::open_in_memory().unwrap();
        repo.save_document("learning_stats", "{}").unwrap();
        repo.save_document("learning_stats", r#"{"totalWordsLearned":1}"#).unwrap();
        assert_eq!(
            repo.load_document("learning_stats").unwrap().as_deref(),
            Some(r#"{"totalWordsLearned":1}"#)
        );
    }

    #[test]
    fn documents_are_independent() {
        let repo = SqliteDocumentStore::open_in_memory().unwrap();
        repo.save_document("word_attempts", "{}").unwrap();
        assert_eq!(repo.load_document("learning_stats").unwrap(), None);
    }

    #[test]
    fn records_schema_version() {
        let repo = SqliteDocumentStore::open_in_memory().unwrap();
        assert_eq!(repo.schema_version().unwrap(), SCHEMA_VERSION);
    }
}
