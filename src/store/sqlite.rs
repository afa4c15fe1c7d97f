//! `SQLite`-backed blob store implementation.
//!
//! A dedicated database file with a single `blobs` table plays the role of
//! the host's transactional key-value subsystem. The connection is opened
//! once and reused for the life of the store.

use crate::error::StoreError;
use crate::store::traits::BlobStore;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::{Path, PathBuf};

const BLOBS_SCHEMA: &str = "CREATE TABLE IF NOT EXISTS blobs (
    key   TEXT PRIMARY KEY,
    value BLOB NOT NULL
);";

/// Blob store backed by a local `SQLite` file.
pub struct SqliteBlobStore {
    conn: Connection,
    /// Path to the store file (None for in-memory).
    path: Option<PathBuf>,
}

impl SqliteBlobStore {
    /// Opens or creates a blob store at the given path.
    ///
    /// Creates the parent directory if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be opened or its table created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::Open(e.to_string()))?;
        }

        let conn = Connection::open(&path).map_err(|e| StoreError::Open(e.to_string()))?;
        conn.execute_batch(BLOBS_SCHEMA)
            .map_err(|e| StoreError::Open(e.to_string()))?;

        Ok(Self {
            conn,
            path: Some(path),
        })
    }

    /// Creates an in-memory blob store.
    ///
    /// Useful for testing; nothing survives the process.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be created.
    pub fn in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(|e| StoreError::Open(e.to_string()))?;
        conn.execute_batch(BLOBS_SCHEMA)
            .map_err(|e| StoreError::Open(e.to_string()))?;
        Ok(Self { conn, path: None })
    }

    /// Returns the store file path (None for in-memory).
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl BlobStore for SqliteBlobStore {
    fn put(&mut self, key: &str, bytes: &[u8]) -> Result<(), StoreError> {
        self.conn
            .execute(
                "INSERT OR REPLACE INTO blobs (key, value) VALUES (?1, ?2)",
                params![key, bytes],
            )
            .map_err(|e| StoreError::Write(e.to_string()))?;
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        self.conn
            .query_row("SELECT value FROM blobs WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()
            .map_err(|e| StoreError::Read(e.to_string()))
    }

    fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        self.conn
            .execute("DELETE FROM blobs WHERE key = ?1", params![key])
            .map_err(|e| StoreError::Write(e.to_string()))?;
        Ok(())
    }
}
