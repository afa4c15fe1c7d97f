//! Derived schema view over an engine instance.
//!
//! The schema is ephemeral: it is never persisted, always rebuilt from the
//! engine's live catalogs after a structural change.

use serde::Serialize;
use std::collections::BTreeMap;

/// Mapping from table name to its descriptor.
///
/// Insertion order is irrelevant; a `BTreeMap` keeps rendering deterministic.
pub type Schema = BTreeMap<String, Table>;

/// A user table and its columns in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    /// Table name, unique within the schema.
    pub name: String,
    /// Columns in declaration order.
    pub columns: Vec<Column>,
}

/// A single column descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    /// Column name.
    pub name: String,
    /// Declared type as free-form text; the engine does not enforce a
    /// closed type enum.
    pub decl_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_mapping() {
        let mut schema = Schema::new();
        schema.insert(
            "employees".to_string(),
            Table {
                name: "employees".to_string(),
                columns: vec![Column {
                    name: "id".to_string(),
                    decl_type: "INT".to_string(),
                }],
            },
        );

        assert_eq!(schema.len(), 1);
        assert_eq!(schema["employees"].columns[0].decl_type, "INT");
    }
}
