//! Cross-cutting error types for schemaform.
//!
//! The transformation functions themselves never fail. Errors only arise at
//! the edges where raw JSON text is turned into typed schema or value trees.
//! Domain-specific errors (`FormError`, `ConfigError`) live in their crates.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// Input was not valid JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A document that must be a JSON object was something else.
    #[error("Expected {what} to be a JSON object, found {found}")]
    NotAnObject { what: String, found: &'static str },
}
