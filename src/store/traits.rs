//! Blob store trait definition.
//!
//! Defines the interface for durable blob persistence, enabling pluggable
//! backends and test doubles that count or fail writes.

use crate::error::StoreError;

/// Trait for durable blob store backends.
///
/// Stores at most one record per key; writing always overwrites. Absence of
/// a record is not an error - it is the expected state on first run.
pub trait BlobStore: Send {
    /// Writes `bytes` under `key`, overwriting any prior content.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails (quota exceeded, store
    /// unavailable). Callers must surface this as a distinct "persistence
    /// failed" condition and keep the in-memory engine usable.
    fn put(&mut self, key: &str, bytes: &[u8]) -> Result<(), StoreError>;

    /// Reads the bytes stored under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error only if the read itself fails; absence is `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Deletes the record under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    fn delete(&mut self, key: &str) -> Result<(), StoreError>;
}
