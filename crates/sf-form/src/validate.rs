//! Validation of submitted values against the rendered schema.
//!
//! Runs on the values the user actually edited, i.e. against the schema with
//! placeholder fields already turned into read-only strings, so untouched
//! sentinels validate.

use serde_json::Value;
use sf_core::{SchemaNode, ValueTree};

use crate::error::FormError;

/// Validate `values` against `schema`.
///
/// # Errors
///
/// Returns `FormError::Schema` if the schema does not compile, or
/// `FormError::ValidationFailed` listing every validation error.
pub fn validate_values(schema: &SchemaNode, values: &ValueTree) -> Result<(), FormError> {
    let schema = Value::from(schema.clone());
    let validator =
        jsonschema::validator_for(&schema).map_err(|e| FormError::Schema(format!("{e}")))?;

    let instance = Value::Object(values.clone());
    let errors: Vec<String> = validator
        .iter_errors(&instance)
        .map(|e| format!("{e}"))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(FormError::ValidationFailed { errors })
    }
}
