//! Error types for SQL Studio operations.
//!
//! This module provides the error hierarchy using `thiserror`. The top-level
//! [`Error`] distinguishes the four conditions the workbench cares about:
//! initialization failures (fatal), execution failures (recoverable, surfaced
//! inline), persistence failures (recoverable, must never mask a successful
//! execution), and provider failures (recoverable, engine state untouched).

use thiserror::Error;

/// Result type alias for SQL Studio operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for SQL Studio operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Engine bootstrap or snapshot restore failed. Fatal to the session;
    /// the workbench must not become interactive.
    #[error("initialization error: {0}")]
    Init(#[from] InitError),

    /// A submitted statement failed. Recoverable; prior schema and result
    /// state are retained.
    #[error("execution error: {0}")]
    Execution(#[from] ExecutionError),

    /// Snapshot export or store write failed. Recoverable; the in-memory
    /// engine remains authoritative.
    #[error("persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    /// External SQL-generation call failed. Does not touch engine state.
    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Durable blob store errors outside the init/persist paths.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),
}

/// Fatal session startup errors.
///
/// The caller is expected to surface these as a blocking "failed to
/// initialize" state rather than retry silently.
#[derive(Error, Debug)]
pub enum InitError {
    /// Reading the stored snapshot from the blob store failed.
    #[error("failed to load stored snapshot: {0}")]
    Load(#[from] StoreError),

    /// Constructing the engine from stored bytes failed (e.g. the snapshot
    /// is corrupt).
    #[error("failed to restore engine from stored snapshot: {0}")]
    Restore(String),

    /// Constructing an empty engine failed.
    #[error("failed to construct engine: {0}")]
    Engine(String),

    /// Applying the seed statements to a fresh engine failed.
    #[error("failed to seed engine: {0}")]
    Seed(String),
}

/// A submitted statement batch failed to execute.
#[derive(Error, Debug)]
pub enum ExecutionError {
    /// The engine rejected a statement. Carries the engine's message
    /// verbatim so the caller can surface it unchanged.
    #[error("{message}")]
    Sql {
        /// The engine's error message.
        message: String,
    },
}

impl From<rusqlite::Error> for ExecutionError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Sql {
            message: err.to_string(),
        }
    }
}

/// Durable blob store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store could not be opened.
    #[error("failed to open store: {0}")]
    Open(String),

    /// A read from the store failed. Note that an absent record is not an
    /// error; it is the expected state on first run.
    #[error("failed to read from store: {0}")]
    Read(String),

    /// A write to the store failed (quota exceeded, store unavailable).
    #[error("failed to write to store: {0}")]
    Write(String),
}

/// Snapshot export or store write failed.
///
/// Never fatal: the user's query result is authoritative even if the save
/// failed, and the in-memory engine stays usable.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Exporting the engine state to bytes failed.
    #[error("failed to export snapshot: {0}")]
    Export(String),

    /// Writing the snapshot to the blob store failed.
    #[error("store write failed: {0}")]
    Store(#[from] StoreError),
}

/// External natural-language-to-SQL provider errors.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The provider failed to produce SQL for the given prompt.
    #[error("SQL generation failed: {0}")]
    Translate(String),

    /// No provider is configured.
    #[error("no SQL generation provider configured")]
    Unavailable,
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Invalid argument provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Failed to read an input file.
    #[error("failed to read file: {path}: {reason}")]
    FileRead {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Command execution failed.
    #[error("command execution failed: {0}")]
    ExecutionFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execution_error_is_verbatim() {
        let err = ExecutionError::Sql {
            message: "near \"SELEKT\": syntax error".to_string(),
        };
        // The engine message must pass through unchanged.
        assert_eq!(err.to_string(), "near \"SELEKT\": syntax error");
    }

    #[test]
    fn test_error_from_init() {
        let err: Error = InitError::Restore("file is not a database".to_string()).into();
        assert!(matches!(err, Error::Init(InitError::Restore(_))));
        assert!(err.to_string().starts_with("initialization error:"));
    }

    #[test]
    fn test_store_error_nests_into_persistence() {
        let err: PersistenceError = StoreError::Write("disk full".to_string()).into();
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_store_error_nests_into_init() {
        let err: InitError = StoreError::Read("store unavailable".to_string()).into();
        assert!(matches!(err, InitError::Load(_)));
    }

    #[test]
    fn test_provider_error_display() {
        let err = ProviderError::Unavailable;
        assert_eq!(err.to_string(), "no SQL generation provider configured");
    }

    #[test]
    fn test_command_error_display() {
        let err = CommandError::FileRead {
            path: "/tmp/data.sql".to_string(),
            reason: "permission denied".to_string(),
        };
        assert!(err.to_string().contains("/tmp/data.sql"));
        assert!(err.to_string().contains("permission denied"));
    }
}
