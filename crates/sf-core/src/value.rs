//! Value trees and the predicates the form pipeline applies to them.

use serde_json::{Map, Value};

use crate::errors::CoreError;

/// Form data mirroring a schema's object nesting.
pub type ValueTree = Map<String, Value>;

/// Structural emptiness: `null`, `""`, `[]` and `{}`.
///
/// Numbers and booleans are never empty, so a password attribute holding
/// `0` or `false` is still submitted.
#[must_use]
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Loose truthiness as the console's form layer evaluates a declared default.
///
/// `null`, `false`, `0` and `""` are falsy. Arrays and objects are truthy
/// even when empty.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Name of the JSON kind, for error messages.
#[must_use]
pub const fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Unwrap a JSON document that must be an object into a [`ValueTree`].
///
/// # Errors
///
/// Returns `CoreError::NotAnObject` when `value` is not a JSON object.
pub fn into_value_tree(value: Value, what: &str) -> Result<ValueTree, CoreError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(CoreError::NotAnObject {
            what: what.to_string(),
            found: kind_name(&other),
        }),
    }
}

/// Parse JSON text that must hold an object.
///
/// # Errors
///
/// Returns `CoreError::Json` on malformed input, `CoreError::NotAnObject`
/// when the document is not an object.
pub fn value_tree_from_str(text: &str, what: &str) -> Result<ValueTree, CoreError> {
    let value: Value = serde_json::from_str(text)?;
    into_value_tree(value, what)
}
