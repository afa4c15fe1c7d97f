//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::core::{ResultSet, Schema};
use crate::error::Error;
use crate::workbench::QueryOutcome;
use serde::Serialize;
use std::fmt::Write;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Formats a query outcome.
#[must_use]
pub fn format_outcome(outcome: &QueryOutcome, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => format_json(outcome),
        OutputFormat::Text => match outcome {
            QueryOutcome::Success { result } => format_result_text(result),
            QueryOutcome::Failure { message } => format!("Error: {message}\n"),
        },
    }
}

fn format_result_text(result: &ResultSet) -> String {
    if result.is_empty() {
        return "OK (no rows)\n".to_string();
    }

    // One pass over the data to size each column.
    let mut widths: Vec<usize> = result.columns.iter().map(String::len).collect();
    let rendered: Vec<Vec<String>> = result
        .rows
        .iter()
        .map(|row| row.iter().map(ToString::to_string).collect())
        .collect();
    for row in &rendered {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.len());
            }
        }
    }

    let mut output = String::new();
    let header: Vec<String> = result
        .columns
        .iter()
        .zip(&widths)
        .map(|(name, &width)| format!("{name:<width$}"))
        .collect();
    let _ = writeln!(output, "{}", header.join(" | "));

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(output, "{}", rule.join("-+-"));

    for row in &rendered {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect();
        let _ = writeln!(output, "{}", line.join(" | "));
    }

    let _ = writeln!(
        output,
        "({} row{})",
        result.row_count(),
        if result.row_count() == 1 { "" } else { "s" }
    );
    output
}

/// Formats the schema listing.
#[must_use]
pub fn format_schema(schema: &Schema, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => format_json(schema),
        OutputFormat::Text => {
            if schema.is_empty() {
                return "No tables.\n".to_string();
            }
            let mut output = String::new();
            for table in schema.values() {
                let _ = writeln!(output, "{}", table.name);
                for column in &table.columns {
                    let _ = writeln!(output, "  {}  {}", column.name, column.decl_type);
                }
            }
            output
        }
    }
}

/// Formats an error for the CLI boundary.
#[must_use]
pub fn format_error(err: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => err.to_string(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorOutput {
                error: String,
            }
            format_json(&ErrorOutput {
                error: err.to_string(),
            })
        }
    }
}

/// Formats a value as JSON.
fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}
