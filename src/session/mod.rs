//! Engine session manager.
//!
//! Owns the lifecycle of one engine instance per process: first-use
//! bootstrap, snapshot restore-or-seed, and snapshot export/persist after
//! mutation. The session is an explicitly owned object constructed once at
//! process start and passed by reference to all operations.

pub mod seed;

pub use seed::SEED_STATEMENTS;

use crate::engine::Engine;
use crate::error::{InitError, PersistenceError, StoreError};
use crate::store::{BlobStore, SNAPSHOT_KEY};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Shared handle to the one engine instance.
///
/// The mutex serializes statement submissions; the design does not support
/// concurrent in-flight statements against the same instance.
pub type EngineHandle = Arc<Mutex<Engine>>;

/// Owns the engine instance and its durable blob store.
pub struct Session {
    store: Mutex<Box<dyn BlobStore>>,
    engine: Mutex<Option<EngineHandle>>,
}

/// Recovers the guard from a poisoned lock.
///
/// The protected state is a plain engine or store handle with no invariants
/// that a panicking holder could have broken mid-update.
pub(crate) fn relock<'a, T>(
    result: Result<MutexGuard<'a, T>, PoisonError<MutexGuard<'a, T>>>,
) -> MutexGuard<'a, T> {
    result.unwrap_or_else(PoisonError::into_inner)
}

impl Session {
    /// Creates a session over the given blob store.
    ///
    /// No engine is constructed until [`Session::acquire`] is first called.
    #[must_use]
    pub fn new(store: Box<dyn BlobStore>) -> Self {
        Self {
            store: Mutex::new(store),
            engine: Mutex::new(None),
        }
    }

    /// Returns the memoized engine, constructing it on first use.
    ///
    /// First-time initialization restores from the stored snapshot when one
    /// exists, otherwise seeds a fresh engine with the fixed sample content
    /// and persists the result so the seed is durable before any user
    /// action. The memoization slot stays locked for the whole
    /// initialization, so concurrent first callers receive the same eventual
    /// instance rather than racing into duplicate construction.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or the engine cannot be
    /// constructed. Both are fatal to session startup.
    pub fn acquire(&self) -> Result<EngineHandle, InitError> {
        let mut slot = relock(self.engine.lock());
        if let Some(handle) = slot.as_ref() {
            return Ok(handle.clone());
        }

        let stored = relock(self.store.lock()).get(SNAPSHOT_KEY)?;
        let engine = match stored {
            Some(bytes) => {
                tracing::debug!(len = bytes.len(), "restoring engine from stored snapshot");
                Engine::from_snapshot(&bytes)?
            }
            None => {
                tracing::debug!("no stored snapshot; seeding engine with sample content");
                let engine = Engine::open_empty()?;
                for statement in SEED_STATEMENTS {
                    engine
                        .execute_script(statement)
                        .map_err(|e| InitError::Seed(e.to_string()))?;
                }
                // Make the seed durable before the first user action. A
                // failed write leaves the engine usable in memory, same as
                // any later persistence failure.
                match engine.export() {
                    Ok(bytes) => {
                        if let Err(e) = relock(self.store.lock()).put(SNAPSHOT_KEY, &bytes) {
                            tracing::warn!(error = %e, "failed to persist seed snapshot");
                        }
                    }
                    Err(e) => tracing::warn!(error = %e, "failed to export seed snapshot"),
                }
                engine
            }
        };

        let handle = Arc::new(Mutex::new(engine));
        *slot = Some(handle.clone());
        Ok(handle)
    }

    /// Exports the engine's full state and overwrites the stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the export or store write fails. Failures are
    /// logged and reported but do not mutate or invalidate the live engine;
    /// the in-memory state is simply ahead of the durable state until the
    /// next successful persist.
    pub fn persist(&self, handle: &EngineHandle) -> Result<(), PersistenceError> {
        let bytes = relock(handle.lock()).export()?;
        relock(self.store.lock()).put(SNAPSHOT_KEY, &bytes)?;
        tracing::debug!(len = bytes.len(), "persisted engine snapshot");
        Ok(())
    }

    /// Deletes the stored snapshot and forgets the memoized engine, so the
    /// next acquisition seeds from scratch.
    ///
    /// # Errors
    ///
    /// Returns an error if the store delete fails.
    pub fn clear(&self) -> Result<(), StoreError> {
        relock(self.store.lock()).delete(SNAPSHOT_KEY)?;
        *relock(self.engine.lock()) = None;
        Ok(())
    }
}
