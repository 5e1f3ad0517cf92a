//! Default values declared by a schema.
//!
//! Extraction keeps the schema's object nesting: every object-typed property
//! yields a (possibly empty) nested map, every leaf with an accepted
//! `default` yields that literal, and everything else is left out.

use serde_json::Value;
use sf_core::value::is_truthy;
use sf_core::{SchemaNode, ValueTree};

/// Which declared defaults count as present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DefaultPolicy {
    /// Only truthy defaults. `0`, `false`, `""` and `null` are dropped as if
    /// no default had been declared.
    #[default]
    Truthy,
    /// Any declared `default`, falsy or not.
    Declared,
}

impl DefaultPolicy {
    fn accepts(self, default: &Value) -> bool {
        match self {
            Self::Truthy => is_truthy(default),
            Self::Declared => true,
        }
    }
}

/// Defaults under [`DefaultPolicy::Truthy`].
///
/// ```
/// use serde_json::json;
/// use sf_core::SchemaNode;
///
/// let schema = SchemaNode::from(json!({
///     "type": "object",
///     "properties": {
///         "a": {"type": "object", "properties": {"b": {"type": "integer", "default": 600}}}
///     }
/// }));
/// let defaults = sf_form::extract_defaults(&schema);
/// assert_eq!(serde_json::Value::Object(defaults), json!({"a": {"b": 600}}));
/// ```
#[must_use]
pub fn extract_defaults(schema: &SchemaNode) -> ValueTree {
    extract_defaults_with(schema, DefaultPolicy::Truthy)
}

/// Defaults under an explicit policy. A non-object root yields an empty map.
#[must_use]
pub fn extract_defaults_with(schema: &SchemaNode, policy: DefaultPolicy) -> ValueTree {
    let SchemaNode::Object(object) = schema else {
        return ValueTree::new();
    };

    let mut defaults = ValueTree::new();
    for (name, property) in &object.properties {
        match property {
            SchemaNode::Object(_) => {
                let nested = extract_defaults_with(property, policy);
                defaults.insert(name.clone(), Value::Object(nested));
            }
            SchemaNode::Leaf(leaf) => {
                if let Some(default) = leaf.default.as_ref().filter(|d| policy.accepts(d)) {
                    defaults.insert(name.clone(), default.clone());
                }
            }
        }
    }
    defaults
}

/// Overlay `values` on `defaults`.
///
/// Values win. Where both sides hold an object the merge recurses, so a
/// partially populated nested section keeps the defaults it does not set.
#[must_use]
pub fn apply_defaults(defaults: &ValueTree, values: &ValueTree) -> ValueTree {
    let mut merged = defaults.clone();
    for (key, value) in values {
        if let (Some(Value::Object(base)), Value::Object(overlay)) = (merged.get_mut(key), value) {
            let nested = apply_defaults(base, overlay);
            *base = nested;
            continue;
        }
        merged.insert(key.clone(), value.clone());
    }
    merged
}
