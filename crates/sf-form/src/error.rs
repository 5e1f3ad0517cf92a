//! Form pipeline error types.

use thiserror::Error;

/// Errors raised while saving a form.
///
/// Loading never fails; malformed schemas and values degrade to empty or
/// pass-through results instead.
#[derive(Debug, Error)]
pub enum FormError {
    /// Submitted values did not pass schema validation.
    #[error("Validation failed: {errors:?}")]
    ValidationFailed {
        /// Individual error messages from the validator.
        errors: Vec<String>,
    },

    /// The rendered schema could not be compiled for validation.
    #[error("Schema compilation error: {0}")]
    Schema(String),

    /// The persistence collaborator rejected the update.
    #[error("Persistence update failed: {0}")]
    Persistence(#[source] Box<dyn std::error::Error + Send + Sync>),
}
