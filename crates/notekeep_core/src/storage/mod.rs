//! Key/value blob stores used for durability across sessions.
//!
//! # Responsibility
//! - Define the synchronous `BlobStore` contract the persistence bridge
//!   writes through.
//! - Provide in-memory and SQLite-backed implementations.
//!
//! # Invariants
//! - `get` on a key never written returns `Ok(None)`, not an error.
//! - `set` replaces the whole value for the key.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryBlobStore;
pub use sqlite::SqliteBlobStore;

pub type BlobResult<T> = Result<T, BlobError>;

/// Failure reported by a blob store backend.
#[derive(Debug)]
pub enum BlobError {
    /// SQLite bootstrap or query failure.
    Db(DbError),
    /// Backend-specific failure (quota exceeded, unavailable, ...).
    Backend(String),
}

impl Display for BlobError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Backend(message) => write!(f, "blob store failure: {message}"),
        }
    }
}

impl Error for BlobError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Backend(_) => None,
        }
    }
}

impl From<DbError> for BlobError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for BlobError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Synchronous string-valued key/value store.
pub trait BlobStore {
    /// Reads the value stored under `key`.
    fn get(&self, key: &str) -> BlobResult<Option<String>>;
    /// Replaces the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> BlobResult<()>;
}

impl<S: BlobStore + ?Sized> BlobStore for Box<S> {
    fn get(&self, key: &str) -> BlobResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> BlobResult<()> {
        (**self).set(key, value)
    }
}
