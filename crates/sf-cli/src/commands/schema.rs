use schemars::schema_for;
use sf_core::responses::{PreparedForm, Submission};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaDocument};
use crate::output::output;

/// Handle `sfm schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = run(args)?;
    output(&schema, flags.format)
}

pub fn run(args: &SchemaArgs) -> anyhow::Result<serde_json::Value> {
    let schema = match args.document {
        SchemaDocument::PreparedForm => schema_for!(PreparedForm),
        SchemaDocument::Submission => schema_for!(Submission),
    };
    Ok(serde_json::to_value(schema)?)
}
