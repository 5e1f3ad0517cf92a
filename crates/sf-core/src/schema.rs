//! Typed view of a JSON-Schema-like form description.
//!
//! A node is an object node only when its `type` is exactly `"object"`.
//! Everything else is a leaf, whatever else it declares. Keywords the form
//! pipeline does not interpret (`title`, `description`, `propertyOrder`,
//! `enum`, ...) are carried through untouched so a node converts back to
//! the JSON it came from.
//!
//! Conversion from JSON is total: a schema that is not a JSON object (for
//! example the boolean schema `true`) becomes an empty leaf.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::CoreError;

/// The `type` value that makes a node an object node.
pub const OBJECT_TYPE: &str = "object";

/// Keyword marking a rendered field as not editable.
pub const READ_ONLY_KEYWORD: &str = "readonly";

/// Keywords kept when a node is collapsed to a read-only placeholder field.
const ANNOTATION_KEYWORDS: &[&str] = &["title", "description", "propertyOrder", "format"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum SchemaNode {
    Object(ObjectSchema),
    Leaf(LeafSchema),
}

/// A node with `type: "object"`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectSchema {
    pub properties: BTreeMap<String, SchemaNode>,
    /// Whether the source carried a `properties` map, even an empty one.
    pub declares_properties: bool,
    /// Every other keyword, excluding `type` and `properties`.
    pub keywords: Map<String, Value>,
}

/// Any node whose `type` is not `"object"`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LeafSchema {
    /// Declared `default`. `Some(Value::Null)` means `"default": null` was
    /// written out explicitly.
    pub default: Option<Value>,
    pub format: Option<String>,
    /// Every other keyword, including `type`.
    pub keywords: Map<String, Value>,
}

impl SchemaNode {
    /// Parse schema JSON text.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Json` if `text` is not valid JSON.
    pub fn from_json_str(text: &str) -> Result<Self, CoreError> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::from(value))
    }

    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    #[must_use]
    pub const fn as_object(&self) -> Option<&ObjectSchema> {
        match self {
            Self::Object(object) => Some(object),
            Self::Leaf(_) => None,
        }
    }

    #[must_use]
    pub const fn as_leaf(&self) -> Option<&LeafSchema> {
        match self {
            Self::Leaf(leaf) => Some(leaf),
            Self::Object(_) => None,
        }
    }

    /// Child schema for `name`, if this is an object node declaring it.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Self> {
        self.as_object().and_then(|object| object.properties.get(name))
    }

    /// Look up the `title`/`description`/... annotation keyword on either kind.
    #[must_use]
    pub fn keyword(&self, name: &str) -> Option<&Value> {
        match self {
            Self::Object(object) => object.keywords.get(name),
            Self::Leaf(leaf) => leaf.keywords.get(name),
        }
    }

    /// A read-only string field standing in for this node.
    ///
    /// Only annotation keywords survive; validation keywords such as `enum`
    /// or `minimum` would reject the placeholder text shown in their place.
    #[must_use]
    pub fn to_read_only_string(&self) -> Self {
        let mut keywords = self.annotation_keywords();
        keywords.insert("type".to_string(), Value::from("string"));
        keywords.insert(READ_ONLY_KEYWORD.to_string(), Value::Bool(true));

        Self::Leaf(LeafSchema {
            default: None,
            format: self.as_leaf().and_then(|leaf| leaf.format.clone()),
            keywords,
        })
    }

    /// This node made read-only while keeping its declared `type`.
    ///
    /// Used for arrays and free-form objects that hold placeholders somewhere
    /// inside. `items`, `additionalProperties` and other validation keywords
    /// are dropped so the placeholder text inside still validates.
    #[must_use]
    pub fn to_read_only_container(&self) -> Self {
        let mut keywords = self.annotation_keywords();
        keywords.insert(READ_ONLY_KEYWORD.to_string(), Value::Bool(true));

        match self {
            Self::Object(_) => Self::Object(ObjectSchema {
                keywords,
                ..ObjectSchema::default()
            }),
            Self::Leaf(leaf) => {
                if let Some(schema_type) = leaf.keywords.get("type") {
                    keywords.insert("type".to_string(), schema_type.clone());
                }
                Self::Leaf(LeafSchema {
                    default: None,
                    format: leaf.format.clone(),
                    keywords,
                })
            }
        }
    }

    fn annotation_keywords(&self) -> Map<String, Value> {
        ANNOTATION_KEYWORDS
            .iter()
            .filter_map(|name| self.keyword(name).map(|value| ((*name).to_string(), value.clone())))
            .collect()
    }
}

impl LeafSchema {
    /// The declared `type`, when it is a single string.
    #[must_use]
    pub fn schema_type(&self) -> Option<&str> {
        self.keywords.get("type").and_then(Value::as_str)
    }

    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.keywords.get(READ_ONLY_KEYWORD) == Some(&Value::Bool(true))
    }
}

impl From<Value> for SchemaNode {
    fn from(value: Value) -> Self {
        let Value::Object(mut keywords) = value else {
            return Self::Leaf(LeafSchema::default());
        };

        if keywords.get("type").and_then(Value::as_str) != Some(OBJECT_TYPE) {
            let default = keywords.remove("default");
            let format = match keywords.remove("format") {
                Some(Value::String(format)) => Some(format),
                Some(other) => {
                    keywords.insert("format".to_string(), other);
                    None
                }
                None => None,
            };
            return Self::Leaf(LeafSchema {
                default,
                format,
                keywords,
            });
        }

        keywords.remove("type");
        let (properties, declares_properties) = match keywords.remove("properties") {
            Some(Value::Object(properties)) => (
                properties
                    .into_iter()
                    .map(|(name, child)| (name, Self::from(child)))
                    .collect(),
                true,
            ),
            // Malformed `properties` is kept verbatim and treated as none.
            Some(other) => {
                keywords.insert("properties".to_string(), other);
                (BTreeMap::new(), false)
            }
            None => (BTreeMap::new(), false),
        };

        Self::Object(ObjectSchema {
            properties,
            declares_properties,
            keywords,
        })
    }
}

impl From<SchemaNode> for Value {
    fn from(node: SchemaNode) -> Self {
        match node {
            SchemaNode::Object(object) => object.into(),
            SchemaNode::Leaf(leaf) => leaf.into(),
        }
    }
}

impl From<ObjectSchema> for Value {
    fn from(object: ObjectSchema) -> Self {
        let mut map = object.keywords;
        map.insert("type".to_string(), Self::from(OBJECT_TYPE));
        if object.declares_properties || !object.properties.is_empty() {
            let properties = object
                .properties
                .into_iter()
                .map(|(name, child)| (name, Self::from(child)))
                .collect();
            map.insert("properties".to_string(), Self::Object(properties));
        }
        Self::Object(map)
    }
}

impl From<LeafSchema> for Value {
    fn from(leaf: LeafSchema) -> Self {
        let mut map = leaf.keywords;
        if let Some(default) = leaf.default {
            map.insert("default".to_string(), default);
        }
        if let Some(format) = leaf.format {
            map.insert("format".to_string(), Self::String(format));
        }
        Self::Object(map)
    }
}
