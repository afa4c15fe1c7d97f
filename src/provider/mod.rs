//! Natural-language-to-SQL provider seam.
//!
//! The provider is an external collaborator: purely advisory, never required
//! for core operation. Only the interface lives here; concrete providers are
//! supplied by the caller.

use crate::error::ProviderError;

/// Translates a natural-language prompt into SQL text.
///
/// Implementations receive the current schema-as-DDL text so the generated
/// SQL can reference existing tables. A failure carries a provider-specific
/// message and must not touch engine state at all.
pub trait SqlProvider {
    /// Produces SQL text for the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider cannot produce SQL.
    fn translate(&self, prompt: &str, schema_sql: &str) -> Result<String, ProviderError>;
}
