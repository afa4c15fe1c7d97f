//! Cell values at the engine boundary.
//!
//! The embedded engine is loosely typed; this module models the values it can
//! hand back as a closed tagged variant, converted from the engine's native
//! representation at the boundary.

use rusqlite::types::ValueRef;
use serde::Serialize;
use std::fmt;

/// A single cell value in a query result.
///
/// Booleans surface as integers, following the engine's own convention.
/// Blobs are hex-encoded into text; the workbench never produces them but
/// the engine can store them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// SQL NULL.
    Null,
    /// Integer value (i64).
    Integer(i64),
    /// Floating point value (f64).
    Real(f64),
    /// Text value.
    Text(String),
}

impl Value {
    /// Returns true if this value is SQL NULL.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<ValueRef<'_>> for Value {
    fn from(value: ValueRef<'_>) -> Self {
        match value {
            ValueRef::Null => Self::Null,
            ValueRef::Integer(i) => Self::Integer(i),
            ValueRef::Real(r) => Self::Real(r),
            ValueRef::Text(t) => Self::Text(String::from_utf8_lossy(t).into_owned()),
            ValueRef::Blob(b) => {
                let hex: String = b.iter().map(|byte| format!("{byte:02x}")).collect();
                Self::Text(hex)
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "NULL"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Real(r) => write!(f, "{r}"),
            Self::Text(t) => write!(f, "{t}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_value_ref() {
        assert_eq!(Value::from(ValueRef::Null), Value::Null);
        assert_eq!(Value::from(ValueRef::Integer(42)), Value::Integer(42));
        assert_eq!(Value::from(ValueRef::Real(1.5)), Value::Real(1.5));
        assert_eq!(
            Value::from(ValueRef::Text(b"hello")),
            Value::Text("hello".to_string())
        );
    }

    #[test]
    fn test_blob_hex_encodes() {
        assert_eq!(
            Value::from(ValueRef::Blob(&[0xde, 0xad])),
            Value::Text("dead".to_string())
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Null.to_string(), "NULL");
        assert_eq!(Value::Integer(7).to_string(), "7");
        assert_eq!(Value::Text("x".to_string()).to_string(), "x");
    }

    #[test]
    fn test_json_serialization_is_untagged() {
        let row = vec![Value::Null, Value::Integer(1), Value::Text("a".to_string())];
        let json = serde_json::to_string(&row).unwrap_or_default();
        assert_eq!(json, "[null,1,\"a\"]");
    }
}
