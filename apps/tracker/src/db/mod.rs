//! Local SQLite persistence for the durable stores.

pub mod durable;
pub mod error;
pub mod repository;
pub mod schema;

pub use durable::Durable;
pub use error::DbError;
pub use repository::{DocumentStore, SharedDocuments, SqliteDocumentStore};
