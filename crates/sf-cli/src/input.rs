use std::fs;
use std::path::Path;

use anyhow::Context;
use sf_core::value::value_tree_from_str;
use sf_core::{SchemaNode, ValueTree};

pub fn read_schema(path: &Path) -> anyhow::Result<SchemaNode> {
    let text = read_text(path)?;
    SchemaNode::from_json_str(&text)
        .with_context(|| format!("invalid schema JSON in {}", path.display()))
}

pub fn read_values(path: &Path, what: &str) -> anyhow::Result<ValueTree> {
    let text = read_text(path)?;
    value_tree_from_str(&text, what)
        .with_context(|| format!("invalid {what} JSON in {}", path.display()))
}

fn read_text(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
