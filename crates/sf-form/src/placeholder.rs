//! Placeholder sentinels: detection, flattening, read-only marking, revert.
//!
//! When the server cannot return a value in full (for example because it is
//! bound to a deployment property the caller may not read) it sends a
//! placeholder instead. On the wire that is a single-entry object keyed by a
//! `$`-prefixed type tag whose value is the sentinel string:
//!
//! ```text
//! {"$int": "&{am.server.port}"}   {"$string": "&{am.realm|/}"}
//! ```
//!
//! The form only ever shows the bare sentinel (`&{am.server.port}`), in a
//! read-only field. On save, a field still holding the same sentinel it was
//! loaded with goes back to the server exactly as it arrived.

use serde_json::Value;
use sf_core::{ObjectSchema, SchemaNode, ValueTree};

const SENTINEL_OPEN: &str = "&{";
const SENTINEL_CLOSE: char = '}';
const WRAPPER_TAG_PREFIX: char = '$';

/// Whether `text` is a bare sentinel: `&{key}` with a non-blank key and no
/// further braces.
#[must_use]
pub fn is_placeholder_sentinel(text: &str) -> bool {
    text.strip_prefix(SENTINEL_OPEN)
        .and_then(|rest| rest.strip_suffix(SENTINEL_CLOSE))
        .is_some_and(|key| !key.trim().is_empty() && !key.contains(['{', '}']))
}

/// The sentinel carried by `value`, whether wrapped or already flattened.
#[must_use]
pub fn placeholder_sentinel(value: &Value) -> Option<&str> {
    match value {
        Value::String(text) if is_placeholder_sentinel(text) => Some(text.as_str()),
        Value::Object(map) if map.len() == 1 => {
            let (tag, inner) = map.iter().next()?;
            if !tag.starts_with(WRAPPER_TAG_PREFIX) {
                return None;
            }
            inner.as_str().filter(|text| is_placeholder_sentinel(text))
        }
        _ => None,
    }
}

/// Whether `value` itself is a placeholder (wrapped or flattened).
#[must_use]
pub fn is_placeholder(value: &Value) -> bool {
    placeholder_sentinel(value).is_some()
}

/// Whether `value` is or contains a placeholder at any depth.
#[must_use]
pub fn contains_placeholder(value: &Value) -> bool {
    if is_placeholder(value) {
        return true;
    }
    match value {
        Value::Object(map) => map.values().any(contains_placeholder),
        Value::Array(items) => items.iter().any(contains_placeholder),
        _ => false,
    }
}

/// Whether any entry of `values` is or contains a placeholder.
#[must_use]
pub fn tree_contains_placeholder(values: &ValueTree) -> bool {
    values.values().any(contains_placeholder)
}

/// Copy of `values` with every placeholder wrapper replaced by its sentinel
/// string, inside nested objects and arrays too.
#[must_use]
pub fn flatten_placeholders(values: &ValueTree) -> ValueTree {
    values
        .iter()
        .map(|(key, value)| (key.clone(), flatten_value(value)))
        .collect()
}

fn flatten_value(value: &Value) -> Value {
    if let Some(sentinel) = placeholder_sentinel(value) {
        return Value::String(sentinel.to_string());
    }
    match value {
        Value::Object(map) => Value::Object(flatten_placeholders(map)),
        Value::Array(items) => Value::Array(items.iter().map(flatten_value).collect()),
        other => other.clone(),
    }
}

/// Copy of `schema` where every property whose value in `original_values` is
/// a placeholder becomes a read-only string field.
///
/// An object-typed property holding a placeholder as a whole collapses to a
/// single read-only field. Object-typed properties that declare properties and
/// hold objects recurse. Any other property with a placeholder somewhere
/// inside (an array, a free-form map) is made read-only as a whole.
#[must_use]
pub fn schema_to_read_only_where_placeholder(
    original_values: &ValueTree,
    schema: &SchemaNode,
) -> SchemaNode {
    match schema {
        SchemaNode::Object(object) => SchemaNode::Object(read_only_object(object, original_values)),
        SchemaNode::Leaf(_) => schema.clone(),
    }
}

fn read_only_object(object: &ObjectSchema, values: &ValueTree) -> ObjectSchema {
    let properties = object
        .properties
        .iter()
        .map(|(name, property)| {
            let node = match (property, values.get(name)) {
                (_, Some(value)) if is_placeholder(value) => property.to_read_only_string(),
                (SchemaNode::Object(nested), Some(Value::Object(nested_values)))
                    if !nested.properties.is_empty() =>
                {
                    SchemaNode::Object(read_only_object(nested, nested_values))
                }
                (_, Some(value)) if contains_placeholder(value) => {
                    property.to_read_only_container()
                }
                (SchemaNode::Object(_), Some(value)) if !value.is_object() && !value.is_null() => {
                    tracing::warn!(
                        property = %name,
                        "object-typed property holds a non-object value; leaving schema as is"
                    );
                    property.clone()
                }
                _ => property.clone(),
            };
            (name.clone(), node)
        })
        .collect();

    ObjectSchema {
        properties,
        declares_properties: object.declares_properties,
        keywords: object.keywords.clone(),
    }
}

/// Result of reverting placeholders, with the paths that were restored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    pub values: ValueTree,
    /// Dot-separated paths restored to their original value.
    pub reverted: Vec<String>,
}

/// Restore untouched placeholder fields to the value the server sent.
///
/// A submitted sentinel is restored when the schema covers its field and the
/// original value at the same path carried that same sentinel. Declared object
/// properties are followed by name; below any other covered field (arrays,
/// free-form maps) elements are matched by index or key. Anything the schema
/// does not cover, and any sentinel without a matching original, passes
/// through unchanged.
#[must_use]
pub fn revert_placeholders_to_original(
    submitted_values: &ValueTree,
    schema: &SchemaNode,
    original_values: &ValueTree,
) -> ValueTree {
    reconcile(submitted_values, schema, original_values).values
}

/// [`revert_placeholders_to_original`], also reporting which paths changed.
#[must_use]
pub fn reconcile(
    submitted_values: &ValueTree,
    schema: &SchemaNode,
    original_values: &ValueTree,
) -> Reconciliation {
    let mut reverted = Vec::new();
    let values = match schema {
        SchemaNode::Object(object) => {
            revert_object(submitted_values, object, original_values, "", &mut reverted)
        }
        SchemaNode::Leaf(_) => submitted_values.clone(),
    };
    reverted.sort();
    Reconciliation { values, reverted }
}

fn child_path(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{prefix}.{segment}")
    }
}

fn revert_object(
    submitted: &ValueTree,
    object: &ObjectSchema,
    original: &ValueTree,
    prefix: &str,
    reverted: &mut Vec<String>,
) -> ValueTree {
    let no_original = ValueTree::new();

    submitted
        .iter()
        .map(|(name, value)| {
            let path = child_path(prefix, name);
            let next = match (object.properties.get(name), value) {
                (None, _) => value.clone(),
                (Some(SchemaNode::Object(nested)), Value::Object(nested_values))
                    if !nested.properties.is_empty() =>
                {
                    let nested_original = match original.get(name) {
                        Some(Value::Object(map)) => map,
                        _ => &no_original,
                    };
                    Value::Object(revert_object(
                        nested_values,
                        nested,
                        nested_original,
                        &path,
                        reverted,
                    ))
                }
                (Some(_), _) => revert_value(value, original.get(name), &path, reverted),
            };
            (name.clone(), next)
        })
        .collect()
}

/// Structural revert below a covered field, matching by index or key.
fn revert_value(
    submitted: &Value,
    original: Option<&Value>,
    path: &str,
    reverted: &mut Vec<String>,
) -> Value {
    let Some(source) = original else {
        return submitted.clone();
    };

    match (submitted, source) {
        (Value::String(text), _) if is_placeholder_sentinel(text) => {
            if placeholder_sentinel(source) == Some(text.as_str()) {
                reverted.push(path.to_string());
                source.clone()
            } else {
                submitted.clone()
            }
        }
        (Value::Array(items), Value::Array(sources)) => Value::Array(
            items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    let item_path = child_path(path, &index.to_string());
                    revert_value(item, sources.get(index), &item_path, reverted)
                })
                .collect(),
        ),
        (Value::Object(map), Value::Object(sources)) if !is_placeholder(source) => Value::Object(
            map.iter()
                .map(|(key, item)| {
                    let item_path = child_path(path, key);
                    (key.clone(), revert_value(item, sources.get(key), &item_path, reverted))
                })
                .collect(),
        ),
        _ => submitted.clone(),
    }
}
