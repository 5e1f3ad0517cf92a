//! Documents emitted by the `sfm` CLI.
//!
//! Both derive `JsonSchema` so `sfm schema` can publish their shape.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::value::ValueTree;

/// Everything a form needs at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PreparedForm {
    /// Schema to render, with placeholder-backed fields marked read-only.
    pub schema: Value,

    /// Defaults declared by the schema.
    pub defaults: ValueTree,

    /// Initial field values: flattened server values merged over defaults.
    pub values: ValueTree,

    /// Root properties treated as passwords on save.
    pub password_attributes: Vec<String>,

    /// Whether any server value carried a placeholder.
    pub has_placeholders: bool,
}

/// What gets handed to the persistence collaborator on save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Submission {
    /// Values to persist.
    pub values: ValueTree,

    /// Password attributes left empty and therefore omitted.
    #[serde(default)]
    pub dropped_password_attributes: Vec<String>,

    /// Dot-separated paths whose placeholder was restored to the server value.
    #[serde(default)]
    pub reverted_placeholders: Vec<String>,
}
