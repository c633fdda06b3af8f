//! SQLite-backed blob store.
//!
//! # Invariants
//! - One row per key in `blobs`; writes are upserts.
//! - The connection is migrated before the store is handed out.

use super::{BlobResult, BlobStore};
use crate::db::{open_db, open_db_in_memory};
use crate::model::note::now_epoch_ms;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// Durable blob store over a single SQLite database.
pub struct SqliteBlobStore {
    conn: Connection,
}

impl SqliteBlobStore {
    /// Opens (or creates) the database file at `path`.
    pub fn open(path: impl AsRef<Path>) -> BlobResult<Self> {
        Ok(Self {
            conn: open_db(path)?,
        })
    }

    /// Opens a throwaway in-memory database.
    pub fn open_in_memory() -> BlobResult<Self> {
        Ok(Self {
            conn: open_db_in_memory()?,
        })
    }

    /// Removes the value under `key`. Returns whether a row existed.
    pub fn remove(&mut self, key: &str) -> BlobResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM blobs WHERE key = ?1;", [key])?;
        Ok(changed > 0)
    }
}

impl BlobStore for SqliteBlobStore {
    fn get(&self, key: &str) -> BlobResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM blobs WHERE key = ?1;", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> BlobResult<()> {
        self.conn.execute(
            "INSERT INTO blobs (key, value, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value, now_epoch_ms()],
        )?;
        Ok(())
    }
}
