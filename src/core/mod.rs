//! Core domain types for SQL Studio.
//!
//! Contains the value model at the engine boundary, tabular results, the
//! derived schema view, and the pure statement classifier.

pub mod result;
pub mod schema;
pub mod statement;
pub mod value;

pub use result::ResultSet;
pub use schema::{Column, Schema, Table};
pub use statement::{StatementKind, classify, split_statements};
pub use value::Value;
