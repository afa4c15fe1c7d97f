//! Schema introspection over the engine's system catalogs.
//!
//! Produces a structured schema (tables, columns, declared types) and an
//! equivalent canonical SQL-DDL text form. Both operations are read-only and
//! safe to call after every mutation.

use crate::core::{Column, ResultSet, Schema, Table, Value};
use crate::engine::Engine;
use crate::error::ExecutionError;

/// Returned by [`describe_schema_sql`] when there are no user tables, so
/// callers can distinguish "introspected, empty" from "not yet introspected".
pub const NO_TABLES_SENTINEL: &str = "-- No tables in schema";

/// Engine-internal tables carry this reserved prefix and are excluded.
const RESERVED_TABLE_PREFIX: &str = "sqlite_";

const LIST_TABLES_SQL: &str =
    "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%' ORDER BY name;";

const SCHEMA_SQL_QUERY: &str =
    "SELECT sql FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%';";

/// Builds the table/column mapping from the engine's live catalogs.
///
/// An engine with zero user tables yields an empty mapping, not an error.
///
/// # Errors
///
/// Returns an error if a catalog query fails.
pub fn describe_schema(engine: &Engine) -> Result<Schema, ExecutionError> {
    let mut schema = Schema::new();

    for name in table_names(engine)? {
        let info = engine.execute_script(&format!(
            "PRAGMA table_info({});",
            quote_identifier(&name)
        ))?;
        let columns = info.into_iter().next().map_or_else(Vec::new, column_list);
        schema.insert(name.clone(), Table { name, columns });
    }

    Ok(schema)
}

/// Concatenates the original CREATE text of every user table, blank-line
/// separated, in catalog-returned order.
///
/// # Errors
///
/// Returns an error if the catalog query fails.
pub fn describe_schema_sql(engine: &Engine) -> Result<String, ExecutionError> {
    let results = engine.execute_script(SCHEMA_SQL_QUERY)?;

    let statements: Vec<String> = results
        .into_iter()
        .next()
        .map(|set| set.rows)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|row| match row.into_iter().next() {
            Some(Value::Text(sql)) => Some(sql),
            _ => None,
        })
        .collect();

    if statements.is_empty() {
        return Ok(NO_TABLES_SENTINEL.to_string());
    }
    Ok(statements.join("\n\n"))
}

fn table_names(engine: &Engine) -> Result<Vec<String>, ExecutionError> {
    let results = engine.execute_script(LIST_TABLES_SQL)?;
    Ok(results
        .into_iter()
        .next()
        .map(|set| set.rows)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|row| match row.into_iter().next() {
            Some(Value::Text(name)) if !name.starts_with(RESERVED_TABLE_PREFIX) => Some(name),
            _ => None,
        })
        .collect())
}

/// Extracts (name, declared type) pairs from a `table_info` result, in
/// declaration order. Columns land at indices 1 and 2 of each row.
fn column_list(info: ResultSet) -> Vec<Column> {
    info.rows
        .into_iter()
        .filter_map(|row| {
            let mut cells = row.into_iter().skip(1);
            match (cells.next(), cells.next()) {
                (Some(Value::Text(name)), Some(Value::Text(decl_type))) => {
                    Some(Column { name, decl_type })
                }
                _ => None,
            }
        })
        .collect()
}

/// Quotes an identifier for safe interpolation into a PRAGMA.
fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn engine_with(sql: &str) -> Engine {
        let engine = Engine::open_empty().unwrap();
        engine.execute_script(sql).unwrap();
        engine
    }

    #[test]
    fn test_empty_engine_yields_empty_schema() {
        let engine = Engine::open_empty().unwrap();
        assert!(describe_schema(&engine).unwrap().is_empty());
    }

    #[test]
    fn test_empty_engine_yields_sentinel_not_empty_string() {
        let engine = Engine::open_empty().unwrap();
        assert_eq!(describe_schema_sql(&engine).unwrap(), NO_TABLES_SENTINEL);
    }

    #[test]
    fn test_describe_schema_columns_in_declaration_order() {
        let engine = engine_with(
            "CREATE TABLE t (zulu INT, alpha VARCHAR(10), mike DECIMAL(10, 2));",
        );
        let schema = describe_schema(&engine).unwrap();
        let columns = &schema["t"].columns;
        assert_eq!(columns.len(), 3);
        assert_eq!(columns[0].name, "zulu");
        assert_eq!(columns[1].decl_type, "VARCHAR(10)");
        assert_eq!(columns[2].name, "mike");
    }

    #[test]
    fn test_describe_schema_multiple_tables() {
        let engine = engine_with("CREATE TABLE a (x INT); CREATE TABLE b (y TEXT);");
        let schema = describe_schema(&engine).unwrap();
        assert_eq!(schema.len(), 2);
        assert!(schema.contains_key("a"));
        assert!(schema.contains_key("b"));
    }

    #[test]
    fn test_schema_sql_blank_line_separated() {
        let engine = engine_with("CREATE TABLE a (x INT); CREATE TABLE b (y TEXT);");
        let ddl = describe_schema_sql(&engine).unwrap();
        assert!(ddl.contains("CREATE TABLE a"));
        assert!(ddl.contains("\n\n"));
        assert!(ddl.contains("CREATE TABLE b"));
    }

    #[test]
    fn test_introspection_is_side_effect_free() {
        let engine = engine_with("CREATE TABLE t (x INT); INSERT INTO t VALUES (1);");
        let before = engine.export().unwrap();
        let _ = describe_schema(&engine).unwrap();
        let _ = describe_schema_sql(&engine).unwrap();
        let after = engine.export().unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_quoted_table_name() {
        let engine = engine_with("CREATE TABLE \"odd name\" (x INT);");
        let schema = describe_schema(&engine).unwrap();
        assert_eq!(schema["odd name"].columns[0].name, "x");
    }
}
