//! Password-like attributes and the empty-value filter applied on save.
//!
//! The server never sends password values back, so an untouched password
//! field reaches save time empty. Submitting it would clear the stored
//! credential; omitting the key leaves it unchanged.

use std::collections::BTreeSet;

use sf_core::value::is_empty_value;
use sf_core::{SchemaNode, ValueTree};

/// Names of the root properties whose `format` equals `password_format`.
///
/// Only leaves count, and only at the root: the form is flat, and the filter
/// matches keys of the submitted map by name.
#[must_use]
pub fn password_attributes(schema: &SchemaNode, password_format: &str) -> BTreeSet<String> {
    let Some(object) = schema.as_object() else {
        return BTreeSet::new();
    };

    object
        .properties
        .iter()
        .filter(|(_, property)| {
            property.as_leaf().and_then(|leaf| leaf.format.as_deref()) == Some(password_format)
        })
        .map(|(name, _)| name.clone())
        .collect()
}

/// Drop every attribute named in `password_attribute_names` whose value is
/// empty. All other entries are copied verbatim.
#[must_use]
pub fn filter_empty_password_like_attributes(
    values: &ValueTree,
    password_attribute_names: &BTreeSet<String>,
) -> ValueTree {
    values
        .iter()
        .filter(|(key, value)| {
            !(password_attribute_names.contains(key.as_str()) && is_empty_value(value))
        })
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::{Value, json};

    fn tree(value: Value) -> ValueTree {
        value.as_object().cloned().expect("test value is an object")
    }

    fn names(list: &[&str]) -> BTreeSet<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn collects_root_password_leaves() {
        let schema = SchemaNode::from(json!({
            "type": "object",
            "properties": {
                "bindPassword": {"type": "string", "format": "password"},
                "keystorePassword": {"type": "string", "format": "password"},
                "user": {"type": "string"},
                "nested": {
                    "type": "object",
                    "properties": {"inner": {"type": "string", "format": "password"}}
                }
            }
        }));
        assert_eq!(
            password_attributes(&schema, "password"),
            names(&["bindPassword", "keystorePassword"])
        );
    }

    #[test]
    fn custom_password_format() {
        let schema = SchemaNode::from(json!({
            "type": "object",
            "properties": {
                "a": {"type": "string", "format": "secret"},
                "b": {"type": "string", "format": "password"}
            }
        }));
        assert_eq!(password_attributes(&schema, "secret"), names(&["a"]));
    }

    #[test]
    fn leaf_root_has_no_password_attributes() {
        let schema = SchemaNode::from(json!({"type": "string", "format": "password"}));
        assert!(password_attributes(&schema, "password").is_empty());
    }

    #[rstest]
    #[case(json!(""))]
    #[case(json!(null))]
    #[case(json!([]))]
    #[case(json!({}))]
    fn empty_password_is_dropped(#[case] empty: Value) {
        let values = tree(json!({"bindPassword": empty, "user": "cn=admin"}));
        let filtered = filter_empty_password_like_attributes(&values, &names(&["bindPassword"]));
        assert_eq!(filtered, tree(json!({"user": "cn=admin"})));
    }

    #[rstest]
    #[case(json!("s3cret"))]
    #[case(json!(0))]
    #[case(json!(false))]
    #[case(json!(["x"]))]
    fn non_empty_password_is_kept(#[case] value: Value) {
        let values = tree(json!({"bindPassword": value}));
        let filtered = filter_empty_password_like_attributes(&values, &names(&["bindPassword"]));
        assert_eq!(filtered, values);
    }

    #[test]
    fn other_keys_survive_even_when_empty() {
        let values = tree(json!({
            "description": "",
            "aliases": [],
            "extra": null,
            "bindPassword": ""
        }));
        let filtered = filter_empty_password_like_attributes(&values, &names(&["bindPassword"]));
        assert_eq!(
            filtered,
            tree(json!({"description": "", "aliases": [], "extra": null}))
        );
    }

    #[test]
    fn empty_name_set_is_identity() {
        let values = tree(json!({"bindPassword": "", "a": 1}));
        assert_eq!(
            filter_empty_password_like_attributes(&values, &BTreeSet::new()),
            values
        );
    }
}
