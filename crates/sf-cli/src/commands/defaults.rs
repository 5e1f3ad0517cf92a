use sf_config::SchemaformConfig;
use sf_core::ValueTree;
use sf_form::{FormOptions, extract_defaults_with};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DefaultsArgs;
use crate::input::read_schema;
use crate::output::output;

/// Handle `sfm defaults`.
pub fn handle(
    args: &DefaultsArgs,
    flags: &GlobalFlags,
    config: &SchemaformConfig,
) -> anyhow::Result<()> {
    let defaults = run(args, config)?;
    output(&defaults, flags.format)
}

pub fn run(args: &DefaultsArgs, config: &SchemaformConfig) -> anyhow::Result<ValueTree> {
    let schema = read_schema(&args.schema)?;
    let options = FormOptions::from(config);
    Ok(extract_defaults_with(&schema, options.default_policy))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    use super::*;

    fn schema_file(dir: &tempfile::TempDir) -> std::path::PathBuf {
        let path = dir.path().join("schema.json");
        fs::write(
            &path,
            json!({
                "type": "object",
                "properties": {
                    "a": {
                        "type": "object",
                        "properties": {"b": {"type": "integer", "default": 600}}
                    },
                    "enabled": {"type": "boolean", "default": false}
                }
            })
            .to_string(),
        )
        .unwrap();
        path
    }

    #[test]
    fn prints_truthy_defaults_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let args = DefaultsArgs {
            schema: schema_file(&dir),
        };
        let defaults = run(&args, &SchemaformConfig::default()).unwrap();
        assert_eq!(Value::Object(defaults), json!({"a": {"b": 600}}));
    }

    #[test]
    fn keep_falsy_defaults_config_is_honoured() {
        let dir = tempfile::tempdir().unwrap();
        let args = DefaultsArgs {
            schema: schema_file(&dir),
        };
        let mut config = SchemaformConfig::default();
        config.form.keep_falsy_defaults = true;
        let defaults = run(&args, &config).unwrap();
        assert_eq!(
            Value::Object(defaults),
            json!({"a": {"b": 600}, "enabled": false})
        );
    }
}
