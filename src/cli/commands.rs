//! CLI command implementations.
//!
//! Contains the presentation-layer glue for each command: open the store and
//! session, drive the workbench, and format the outcome.

use crate::cli::output::{OutputFormat, format_outcome, format_schema};
use crate::cli::parser::{Cli, Commands};
use crate::core::split_statements;
use crate::error::{CommandError, Result};
use crate::session::Session;
use crate::store::{BlobStore, SNAPSHOT_KEY, SqliteBlobStore};
use crate::workbench::Workbench;
use std::fmt::Write as FmtWrite;
use std::io::{BufRead, Write as IoWrite};
use std::path::Path;

/// Executes the CLI command.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);
    let store_path = cli.get_store_path();

    match &cli.command {
        Commands::Run { sql } => cmd_run(&store_path, sql, format),
        Commands::Import { file } => cmd_import(&store_path, file, format),
        Commands::Schema { sql } => cmd_schema(&store_path, *sql, format),
        Commands::Reset { yes } => cmd_reset(&store_path, *yes),
        Commands::Shell => cmd_shell(&store_path, format),
    }
}

/// Opens the workbench over the store at `path` (restore-or-seed).
fn open_workbench(path: &Path) -> Result<Workbench> {
    let store = SqliteBlobStore::open(path)?;
    Workbench::open(Session::new(Box::new(store)))
}

fn cmd_run(store_path: &Path, sql: &str, format: OutputFormat) -> Result<String> {
    let mut workbench = open_workbench(store_path)?;
    let outcome = workbench.run(sql)?;

    let mut output = format_outcome(&outcome, format);
    if let Some(warning) = workbench.take_persist_warning() {
        let _ = writeln!(output, "Warning: save failed: {warning}");
    }
    Ok(output)
}

fn cmd_import(store_path: &Path, file: &Path, format: OutputFormat) -> Result<String> {
    let content = std::fs::read_to_string(file).map_err(|e| CommandError::FileRead {
        path: file.display().to_string(),
        reason: e.to_string(),
    })?;
    let statements = split_statements(&content);
    if statements.is_empty() {
        return Err(CommandError::InvalidArgument(format!(
            "no statements found in {}",
            file.display()
        ))
        .into());
    }

    let mut workbench = open_workbench(store_path)?;
    workbench.run_batch(&statements)?;

    let mut output = format!("Applied {} statements.\n", statements.len());
    if format == OutputFormat::Text {
        output.push_str(&format_schema(workbench.schema(), format));
    }
    if let Some(warning) = workbench.take_persist_warning() {
        let _ = writeln!(output, "Warning: save failed: {warning}");
    }
    Ok(output)
}

fn cmd_schema(store_path: &Path, as_sql: bool, format: OutputFormat) -> Result<String> {
    let workbench = open_workbench(store_path)?;
    if as_sql {
        let mut output = workbench.schema_sql().to_string();
        if !output.ends_with('\n') {
            output.push('\n');
        }
        return Ok(output);
    }
    Ok(format_schema(workbench.schema(), format))
}

fn cmd_reset(store_path: &Path, yes: bool) -> Result<String> {
    if !yes {
        return Err(CommandError::ExecutionFailed(
            "Use --yes to confirm reset. This will delete the saved database.".to_string(),
        )
        .into());
    }

    // Operate on the store directly; no reason to bootstrap an engine just
    // to delete its snapshot.
    let mut store = SqliteBlobStore::open(store_path)?;
    store.delete(SNAPSHOT_KEY)?;
    Ok("Saved database deleted; next session starts from the sample data.\n".to_string())
}

/// Minimal interactive loop: statements are terminated by a trailing
/// semicolon, `exit`/`quit` or EOF ends the session.
fn cmd_shell(store_path: &Path, format: OutputFormat) -> Result<String> {
    let mut workbench = open_workbench(store_path)?;

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut pending = String::new();

    let _ = writeln!(stdout, "SQL Studio. End statements with ';'.");
    loop {
        let _ = write!(stdout, "{}", if pending.is_empty() { "sql> " } else { "...> " });
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => return Err(CommandError::ExecutionFailed(e.to_string()).into()),
        }

        let trimmed = line.trim();
        if pending.is_empty() && (trimmed == "exit" || trimmed == "quit") {
            break;
        }
        pending.push_str(&line);

        if pending.trim_end().ends_with(';') {
            let sql = std::mem::take(&mut pending);
            let outcome = workbench.run(&sql)?;
            let _ = write!(stdout, "{}", format_outcome(&outcome, format));
            if let Some(warning) = workbench.take_persist_warning() {
                let _ = writeln!(stdout, "Warning: save failed: {warning}");
            }
        }
    }

    Ok(String::new())
}
