//! Tabular query results.

use crate::core::Value;
use serde::Serialize;

/// An ordered tabular result: column names plus rows of cell values.
///
/// A statement batch with no trailing row-returning statement still yields a
/// result - the empty default (zero columns, zero rows) - so downstream
/// rendering has a uniform contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultSet {
    /// Ordered column names.
    pub columns: Vec<String>,
    /// Ordered rows; each row holds one value per column.
    pub rows: Vec<Vec<Value>>,
}

impl ResultSet {
    /// Returns true if this result has no columns and no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.rows.is_empty()
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
