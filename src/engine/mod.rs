//! Embedded relational engine adapter.
//!
//! Wraps an in-memory `SQLite` connection behind exactly the collaborator
//! contract the session manager needs: construct empty, construct from
//! snapshot bytes, execute a script, export to snapshot bytes. SQL parsing,
//! planning and execution stay inside the engine; this module never
//! interprets statements beyond splitting a script.
//!
//! A snapshot is the engine's native main-database file image, produced and
//! consumed through the online backup API and round-tripped as an opaque,
//! versionless binary artifact.

use crate::core::{ResultSet, Value, split_statements};
use crate::error::{ExecutionError, InitError, PersistenceError};
use rusqlite::{Connection, MAIN_DB};
use std::path::Path;

/// A single in-memory engine instance.
///
/// Exclusively owned by the session manager; exactly one instance exists per
/// running process after first acquisition.
pub struct Engine {
    conn: Connection,
}

impl Engine {
    /// Constructs an empty engine with no tables.
    ///
    /// # Errors
    ///
    /// Returns an error if the in-memory database cannot be created.
    pub fn open_empty() -> Result<Self, InitError> {
        let conn = Connection::open_in_memory().map_err(|e| InitError::Engine(e.to_string()))?;
        Ok(Self { conn })
    }

    /// Constructs an engine from previously exported snapshot bytes.
    ///
    /// The bytes are staged to a scratch file and copied into a fresh
    /// in-memory database through the backup API.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a valid database image. This is
    /// fatal to session startup; the caller must not retry silently.
    pub fn from_snapshot(bytes: &[u8]) -> Result<Self, InitError> {
        let staging = tempfile::tempdir().map_err(|e| InitError::Restore(e.to_string()))?;
        let path = staging.path().join("snapshot.db");
        std::fs::write(&path, bytes).map_err(|e| InitError::Restore(e.to_string()))?;

        let mut conn =
            Connection::open_in_memory().map_err(|e| InitError::Engine(e.to_string()))?;
        restore_into(&mut conn, &path).map_err(|e| InitError::Restore(e.to_string()))?;
        Ok(Self { conn })
    }

    /// Exports the full engine state as snapshot bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the backup or staging-file read fails. The live
    /// engine is not affected by an export failure.
    pub fn export(&self) -> Result<Vec<u8>, PersistenceError> {
        let staging = tempfile::tempdir().map_err(|e| PersistenceError::Export(e.to_string()))?;
        let path = staging.path().join("snapshot.db");
        self.conn
            .backup(MAIN_DB, &path, None)
            .map_err(|e| PersistenceError::Export(e.to_string()))?;
        std::fs::read(&path).map_err(|e| PersistenceError::Export(e.to_string()))
    }

    /// Executes a script of one or more semicolon-separated statements.
    ///
    /// Returns the ordered sequence of result sets produced by
    /// row-returning statements; statements that return no rows (DDL, DML)
    /// contribute nothing to the sequence. The orchestrator selects the
    /// last result set - a deliberate choice, not an accident of iteration.
    ///
    /// # Errors
    ///
    /// Returns the engine's error message verbatim if any statement fails.
    /// Statements before the failing one remain applied.
    pub fn execute_script(&self, sql: &str) -> Result<Vec<ResultSet>, ExecutionError> {
        let mut results = Vec::new();

        for statement in split_statements(sql) {
            let mut stmt = self.conn.prepare(&statement)?;
            if stmt.column_count() > 0 {
                let columns: Vec<String> =
                    stmt.column_names().iter().map(ToString::to_string).collect();
                let mut collected = Vec::new();
                let mut rows = stmt.query([])?;
                while let Some(row) = rows.next()? {
                    let mut cells = Vec::with_capacity(columns.len());
                    for i in 0..columns.len() {
                        cells.push(Value::from(row.get_ref(i)?));
                    }
                    collected.push(cells);
                }
                results.push(ResultSet {
                    columns,
                    rows: collected,
                });
            } else {
                stmt.execute([])?;
            }
        }

        Ok(results)
    }
}

/// Copies a database file into an in-memory connection.
fn restore_into(conn: &mut Connection, path: &Path) -> rusqlite::Result<()> {
    conn.restore(
        MAIN_DB,
        path,
        None::<fn(rusqlite::backup::Progress)>,
    )
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_execute_returns_last_select_rows() {
        let engine = Engine::open_empty().unwrap();
        let results = engine.execute_script("SELECT 1 AS a; SELECT 2 AS b;").unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[1].columns, vec!["b"]);
        assert_eq!(results[1].rows, vec![vec![Value::Integer(2)]]);
    }

    #[test]
    fn test_ddl_produces_no_result_set() {
        let engine = Engine::open_empty().unwrap();
        let results = engine.execute_script("CREATE TABLE t (x INT);").unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_execution_error_message_is_verbatim() {
        let engine = Engine::open_empty().unwrap();
        let err = engine.execute_script("SELEKT bad").unwrap_err();
        assert!(err.to_string().contains("SELEKT"));
    }

    #[test]
    fn test_failure_keeps_prior_statements_applied() {
        let engine = Engine::open_empty().unwrap();
        let err = engine.execute_script("CREATE TABLE t (x INT); INVALID SQL;");
        assert!(err.is_err());
        // The CREATE before the failure stays applied.
        let results = engine
            .execute_script("SELECT name FROM sqlite_master WHERE name = 't';")
            .unwrap();
        assert_eq!(results[0].row_count(), 1);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let engine = Engine::open_empty().unwrap();
        engine
            .execute_script("CREATE TABLE t (x INT); INSERT INTO t VALUES (41), (42);")
            .unwrap();

        let snapshot = engine.export().unwrap();
        assert!(!snapshot.is_empty());

        let restored = Engine::from_snapshot(&snapshot).unwrap();
        let results = restored.execute_script("SELECT x FROM t ORDER BY x;").unwrap();
        assert_eq!(
            results[0].rows,
            vec![vec![Value::Integer(41)], vec![Value::Integer(42)]]
        );
    }

    #[test]
    fn test_from_snapshot_rejects_garbage() {
        let err = Engine::from_snapshot(b"definitely not a database image");
        assert!(err.is_err());
    }

    #[test]
    fn test_null_and_real_values() {
        let engine = Engine::open_empty().unwrap();
        let results = engine
            .execute_script("SELECT NULL AS n, 1.5 AS r, 'x' AS t;")
            .unwrap();
        assert_eq!(
            results[0].rows[0],
            vec![Value::Null, Value::Real(1.5), Value::Text("x".to_string())]
        );
    }
}
