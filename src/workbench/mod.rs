//! Statement orchestration.
//!
//! Receives raw statement text, delegates execution to the engine owned by
//! the session manager, classifies the statement, and sequences the
//! follow-up actions: schema refresh on structural change, durability flush
//! on any mutating change.

use crate::core::{ResultSet, Schema, StatementKind, classify};
use crate::error::{Error, ProviderError, Result};
use crate::introspect;
use crate::provider::SqlProvider;
use crate::session::{EngineHandle, Session, relock};
use serde::Serialize;

/// The outcome of one submitted statement batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum QueryOutcome {
    /// The batch executed; carries the last statement's tabular result
    /// (empty when the batch produced no result set at all).
    Success {
        /// The retained result set.
        result: ResultSet,
    },
    /// The batch failed; engine state is unchanged beyond any statements
    /// that ran before the failure.
    Failure {
        /// The engine's error message, verbatim.
        message: String,
    },
}

/// The workbench orchestrator.
///
/// Holds the caller-visible schema state alongside the session; the schema
/// is replaced only after structural changes, so a failed statement leaves
/// the prior view intact.
pub struct Workbench {
    session: Session,
    schema: Schema,
    schema_sql: String,
    persist_warning: Option<String>,
}

impl Workbench {
    /// Opens a workbench over the given session.
    ///
    /// Acquires the engine (restore-or-seed) and performs the initial schema
    /// introspection, so the schema view is populated before the first
    /// statement runs.
    ///
    /// # Errors
    ///
    /// Returns an initialization error if the engine cannot be constructed.
    /// This is fatal; the caller should surface a blocking "failed to
    /// initialize" state rather than retry silently.
    pub fn open(session: Session) -> Result<Self> {
        let handle = session.acquire()?;
        let mut workbench = Self {
            session,
            schema: Schema::new(),
            schema_sql: String::new(),
            persist_warning: None,
        };
        workbench.refresh_schema(&handle)?;
        Ok(workbench)
    }

    /// Executes one submitted statement batch.
    ///
    /// The engine may run multiple semicolon-separated statements in one
    /// call; only the last statement's result set is retained, and a batch
    /// with no result set at all yields an empty tabular result. On
    /// execution failure the engine's message is captured verbatim and no
    /// classification or persistence happens.
    ///
    /// The batch is classified by the leading keyword of the whole submitted
    /// text: structural statements refresh the schema view and persist;
    /// data-mutating statements persist only; read-only statements do
    /// neither. A persistence failure is logged and recorded as a warning
    /// but never masks the successful execution.
    ///
    /// # Errors
    ///
    /// Returns an error only for fatal initialization failures; statement
    /// failures are reported through [`QueryOutcome::Failure`].
    pub fn run(&mut self, sql: &str) -> Result<QueryOutcome> {
        let handle = self.session.acquire()?;

        let executed = relock(handle.lock()).execute_script(sql);
        let results = match executed {
            Ok(results) => results,
            Err(e) => {
                return Ok(QueryOutcome::Failure {
                    message: e.to_string(),
                });
            }
        };

        // Last statement's result wins; synthesize an empty table otherwise.
        let result = results.into_iter().next_back().unwrap_or_default();

        match classify(sql) {
            StatementKind::Structural => {
                self.refresh_schema(&handle)?;
                self.persist_after_mutation(&handle);
            }
            StatementKind::DataMutation => {
                self.persist_after_mutation(&handle);
            }
            StatementKind::ReadOnly => {}
        }

        Ok(QueryOutcome::Success { result })
    }

    /// Applies a sequence of statements for bulk ingestion.
    ///
    /// Statements run in order; the first failure stops the batch and is
    /// returned as an error. The prefix applied before a failure is not
    /// rolled back, and neither schema refresh nor persistence happens on
    /// failure. On full success exactly one schema refresh and one persist
    /// occur, not one per statement.
    ///
    /// # Errors
    ///
    /// Returns an execution error for the first failing statement; callers
    /// must treat this as "some prefix of statements may have applied".
    pub fn run_batch(&mut self, statements: &[String]) -> Result<()> {
        let handle = self.session.acquire()?;

        {
            let engine = relock(handle.lock());
            for statement in statements {
                engine.execute_script(statement).map_err(Error::from)?;
            }
        }

        self.refresh_schema(&handle)?;
        self.persist_after_mutation(&handle);
        Ok(())
    }

    /// Translates a natural-language prompt into SQL using the given
    /// provider, supplying the current schema DDL as context.
    ///
    /// Purely advisory: does not execute the result or touch engine state.
    ///
    /// # Errors
    ///
    /// Returns the provider's error; it is handled at this boundary and
    /// surfaced as a user-facing message, never as an uncaught fault.
    pub fn translate(
        &self,
        provider: &dyn SqlProvider,
        prompt: &str,
    ) -> std::result::Result<String, ProviderError> {
        provider.translate(prompt, &self.schema_sql)
    }

    /// The current table/column schema view.
    #[must_use]
    pub const fn schema(&self) -> &Schema {
        &self.schema
    }

    /// The current schema as canonical CREATE-statement text.
    #[must_use]
    pub fn schema_sql(&self) -> &str {
        &self.schema_sql
    }

    /// Takes the warning left by the most recent failed persist, if any.
    pub fn take_persist_warning(&mut self) -> Option<String> {
        self.persist_warning.take()
    }

    /// Deletes the stored snapshot and drops the memoized engine; the next
    /// acquisition seeds from scratch.
    ///
    /// # Errors
    ///
    /// Returns an error if the store delete fails.
    pub fn reset(&self) -> Result<()> {
        self.session.clear()?;
        Ok(())
    }

    fn refresh_schema(&mut self, handle: &EngineHandle) -> Result<()> {
        let engine = relock(handle.lock());
        self.schema = introspect::describe_schema(&engine)?;
        self.schema_sql = introspect::describe_schema_sql(&engine)?;
        Ok(())
    }

    fn persist_after_mutation(&mut self, handle: &EngineHandle) {
        if let Err(e) = self.session.persist(handle) {
            // The query result stays authoritative even though the save
            // failed; memory is ahead of durable state until the next
            // successful persist.
            tracing::warn!(error = %e, "failed to persist snapshot after mutation");
            self.persist_warning = Some(e.to_string());
        }
    }
}
