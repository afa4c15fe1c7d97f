//! Statement classification and script splitting.
//!
//! The classifier is a pure function over the submitted text and is
//! unit-tested independently of engine execution. The splitter breaks a
//! semicolon-separated script into individual statements, aware of quoting
//! and comments so embedded semicolons do not split.

/// How a submitted statement affects engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    /// CREATE/ALTER/DROP - changes schema; requires a schema refresh and a
    /// durability flush.
    Structural,
    /// INSERT/UPDATE/DELETE - changes rows, not schema; requires a
    /// durability flush only.
    DataMutation,
    /// Everything else (SELECT, PRAGMA, ...) - neither refreshes schema nor
    /// triggers persistence.
    ReadOnly,
}

/// Classifies a submission by its leading keyword, case-insensitively.
///
/// Classification inspects only the first keyword of the whole submitted
/// text. A multi-statement batch whose later statements change schema is
/// therefore not detected as structural; callers that need per-statement
/// accuracy must classify each statement separately.
#[must_use]
pub fn classify(sql: &str) -> StatementKind {
    let keyword: String = sql
        .trim_start()
        .chars()
        .take_while(char::is_ascii_alphabetic)
        .collect::<String>()
        .to_ascii_lowercase();

    match keyword.as_str() {
        "create" | "alter" | "drop" => StatementKind::Structural,
        "insert" | "update" | "delete" => StatementKind::DataMutation,
        _ => StatementKind::ReadOnly,
    }
}

/// Splits a script into individual statements on top-level semicolons.
///
/// Semicolons inside quoted strings (`'...'`, `"..."`, `` `...` ``),
/// bracketed identifiers (`[...]`), line comments (`--`) and block comments
/// (`/* */`) do not split. Fragments containing only whitespace and comments
/// are dropped, and a comment before a statement's first token is stripped;
/// comments inside a statement are preserved. Trailing text without a
/// semicolon is kept as a statement.
#[must_use]
pub fn split_statements(sql: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut current = String::new();
    let mut saw_content = false;
    let mut chars = sql.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\'' | '"' | '`' => {
                saw_content = true;
                current.push(c);
                // Consume the quoted region; a doubled quote is an escape.
                while let Some(q) = chars.next() {
                    current.push(q);
                    if q == c {
                        if chars.peek() == Some(&c) {
                            if let Some(escaped) = chars.next() {
                                current.push(escaped);
                            }
                        } else {
                            break;
                        }
                    }
                }
            }
            '[' => {
                saw_content = true;
                current.push(c);
                while let Some(q) = chars.next() {
                    current.push(q);
                    if q == ']' {
                        break;
                    }
                }
            }
            '-' if chars.peek() == Some(&'-') => {
                // A comment before any statement text is stripped; one
                // inside a statement is preserved.
                let keep = saw_content;
                if keep {
                    current.push(c);
                }
                while let Some(q) = chars.next() {
                    if keep {
                        current.push(q);
                    }
                    if q == '\n' {
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                let keep = saw_content;
                if keep {
                    current.push(c);
                }
                let mut prev = ' ';
                while let Some(q) = chars.next() {
                    if keep {
                        current.push(q);
                    }
                    if prev == '*' && q == '/' {
                        break;
                    }
                    prev = q;
                }
            }
            ';' => {
                if saw_content {
                    statements.push(current.trim().to_string());
                }
                current.clear();
                saw_content = false;
            }
            _ => {
                if !c.is_whitespace() {
                    saw_content = true;
                }
                current.push(c);
            }
        }
    }

    if saw_content {
        statements.push(current.trim().to_string());
    }

    statements
}
