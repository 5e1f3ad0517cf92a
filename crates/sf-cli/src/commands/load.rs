use sf_config::SchemaformConfig;
use sf_core::responses::PreparedForm;
use sf_form::{FlatFormSession, FormOptions};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LoadArgs;
use crate::input::{read_schema, read_values};
use crate::output::output;

/// Handle `sfm load`.
pub fn handle(
    args: &LoadArgs,
    flags: &GlobalFlags,
    config: &SchemaformConfig,
) -> anyhow::Result<()> {
    let prepared = run(args, config)?;
    output(&prepared, flags.format)
}

pub fn run(args: &LoadArgs, config: &SchemaformConfig) -> anyhow::Result<PreparedForm> {
    let schema = read_schema(&args.schema)?;
    let values = read_values(&args.values, "server values")?;

    let session = FlatFormSession::load(schema, values, FormOptions::from(config));
    Ok(session.prepared())
}
