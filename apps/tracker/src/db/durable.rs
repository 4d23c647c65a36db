//! Write-through wrapper for a store's single persisted document.
//!
//! The document is read once at construction and rewritten in full after
//! every mutation. Storage failures never reach callers: an unreadable
//! document starts the store from its default state, and a failed write
//! leaves the in-memory value authoritative until the next successful one.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::db::error::DbError;
use crate::db::repository::SharedDocuments;

pub struct Durable<T> {
    key: &'static str,
    documents: SharedDocuments,
    value: T,
}

impl<T> Durable<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    /// Load the document stored under `key`, or start from `T::default()`.
    pub fn load(documents: SharedDocuments, key: &'static str) -> Self {
        let value = match read(&documents, key) {
            Ok(Some(value)) => value,
            Ok(None) => {
                tracing::debug!(key, "no stored document, starting empty");
                T::default()
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to read stored document, starting empty");
                T::default()
            }
        };
        Self {
            key,
            documents,
            value,
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Apply a mutation and persist the resulting document.
    pub fn update<O>(&mut self, mutate: impl FnOnce(&mut T) -> O) -> O {
        let output = mutate(&mut self.value);
        self.persist();
        output
    }

    fn persist(&self) {
        if let Err(e) = self.write() {
            tracing::error!(key = self.key, error = %e, "failed to persist document, keeping in-memory state");
        }
    }

    fn write(&self) -> Result<(), DbError> {
        let body = serde_json::to_string(&self.value)?;
        let documents = self.documents.lock().map_err(|_| DbError::LockPoisoned)?;
        documents.save_document(self.key, &body)
    }
}

fn read<T: DeserializeOwned>(documents: &SharedDocuments, key: &str) -> Result<Option<T>, DbError> {
    let body = {
        let documents = documents.lock().map_err(|_| DbError::LockPoisoned)?;
        documents.load_document(key)?
    };
    match body {
        Some(body) => Ok(Some(serde_json::from_str(&body)?)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::{DocumentStore, SqliteDocumentStore};
    use std::collections::BTreeMap;
    use std::sync::{Arc, Mutex};

    type Counters = BTreeMap<String, u32>;

    /// Store whose writes always fail.
    struct ReadOnlyStore;

    impl DocumentStore for ReadOnlyStore {
        fn load_document(&self, _key: &str) -> Result<Option<String>, DbError> {
            Ok(None)
        }

        fn save_document(&self, _key: &str, _body: &str) -> Result<(), DbError> {
            Err(DbError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            )))
        }
    }

    #[test]
    fn update_persists_whole_document() {
        let documents = SqliteDocumentStore::open_in_memory().unwrap().into_shared();
        let mut durable: Durable<Counters> = Durable::load(documents.clone(), "counters");
        durable.update(|c| c.insert("apple".into(), 2));

        let reloaded: Durable<Counters> = Durable::load(documents, "counters");
        assert_eq!(reloaded.get().get("apple"), Some(&2));
    }

    #[test]
    fn malformed_document_loads_as_default() {
        let repo = SqliteDocumentStore::open_in_memory().unwrap();
        repo.save_document("counters", "not json").unwrap();
        let durable: Durable<Counters> = Durable::load(repo.into_shared(), "counters");
        assert!(durable.get().is_empty());
    }

    #[test]
    fn failed_write_keeps_memory_state() {
        let documents: SharedDocuments = Arc::new(Mutex::new(ReadOnlyStore));
        let mut durable: Durable<Counters> = Durable::load(documents, "counters");
        let previous = durable.update(|c| c.insert("apple".into(), 1));

        assert_eq!(previous, None);
        assert_eq!(durable.get().get("apple"), Some(&1));
    }
}
