//! Durable blob store.
//!
//! Key/value persistence of opaque binary snapshots, backed by a
//! transactional local key-value subsystem. A single `put` is atomic, but
//! there is no cross-operation transaction spanning execute-plus-persist.

pub mod sqlite;
pub mod traits;

pub use sqlite::SqliteBlobStore;
pub use traits::BlobStore;

/// Fixed logical key under which the one stored snapshot lives.
pub const SNAPSHOT_KEY: &str = "main_db";

/// Default store path relative to the working directory.
pub const DEFAULT_STORE_PATH: &str = ".sql-studio/store.db";
