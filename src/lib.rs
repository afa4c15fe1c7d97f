//! # SQL Studio
//!
//! A persistent embedded-database SQL workbench.
//!
//! SQL Studio runs SQL against an in-memory relational engine and saves the
//! engine's full state to a durable local store after every mutating
//! operation, so the working database survives across sessions. The first
//! session seeds a small sample dataset; later sessions restore whatever
//! was saved.
//!
//! ## Architecture
//!
//! - **Blob store**: key/value persistence of one opaque binary snapshot
//! - **Session manager**: restore-or-seed bootstrap, snapshot persist
//! - **Schema introspector**: derived table/column view over the engine
//! - **Workbench**: executes statements, classifies them, and sequences
//!   schema refresh and durability flush

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![warn(unsafe_code)]

pub mod cli;
pub mod core;
pub mod engine;
pub mod error;
pub mod introspect;
pub mod provider;
pub mod session;
pub mod store;
pub mod workbench;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export core domain types
pub use crate::core::{Column, ResultSet, Schema, StatementKind, Table, Value, classify};

// Re-export the engine adapter
pub use engine::Engine;

// Re-export session types
pub use session::{EngineHandle, SEED_STATEMENTS, Session};

// Re-export store types
pub use store::{BlobStore, DEFAULT_STORE_PATH, SNAPSHOT_KEY, SqliteBlobStore};

// Re-export introspection entry points
pub use introspect::{NO_TABLES_SENTINEL, describe_schema, describe_schema_sql};

// Re-export the orchestrator
pub use workbench::{QueryOutcome, Workbench};

// Re-export the provider seam
pub use provider::SqlProvider;

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};
