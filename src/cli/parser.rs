//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// SQL Studio: a persistent embedded-database SQL workbench.
///
/// Runs SQL against an in-memory engine whose full state is saved to a
/// local store after every mutation, so the working database survives
/// across sessions.
#[derive(Parser, Debug)]
#[command(name = "sql-studio")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the durable store file.
    ///
    /// Defaults to `.sql-studio/store.db` in the current directory.
    #[arg(short, long, env = "SQL_STUDIO_STORE")]
    pub store_path: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Execute a SQL statement batch and print the result.
    Run {
        /// The SQL text; multiple semicolon-separated statements are
        /// allowed, and the last statement's result is shown.
        sql: String,
    },

    /// Apply semicolon-separated statements from a file in one bulk
    /// ingestion (one save at the end, not one per statement).
    Import {
        /// Path to the SQL file.
        file: PathBuf,
    },

    /// Show the current schema.
    Schema {
        /// Print the canonical CREATE-statement text instead of the
        /// table/column listing.
        #[arg(long)]
        sql: bool,
    },

    /// Delete the stored snapshot; the next session reseeds with the
    /// sample tables.
    Reset {
        /// Skip confirmation.
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Interactive shell reading statements from stdin.
    Shell,
}

impl Cli {
    /// Returns the store path, using the default if not specified.
    #[must_use]
    pub fn get_store_path(&self) -> PathBuf {
        self.store_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(crate::store::DEFAULT_STORE_PATH))
    }
}
