use std::fs;
use std::path::PathBuf;

use sf_config::SchemaformConfig;
use sf_core::ValueTree;
use sf_core::responses::Submission;
use sf_form::{FlatFormSession, FormOptions, FormPersistence};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SubmitArgs;
use crate::input::{read_schema, read_values};
use crate::output::output;

/// Writes persisted values to a JSON file.
struct FilePersistence {
    path: PathBuf,
}

impl FormPersistence for FilePersistence {
    type Error = std::io::Error;

    fn update(&mut self, values: &ValueTree) -> Result<(), Self::Error> {
        let json = serde_json::to_string_pretty(values)?;
        fs::write(&self.path, json)
    }
}

/// Keeps nothing; used when only the report is wanted.
struct DiscardPersistence;

impl FormPersistence for DiscardPersistence {
    type Error = std::convert::Infallible;

    fn update(&mut self, _values: &ValueTree) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Handle `sfm submit`.
pub fn handle(
    args: &SubmitArgs,
    flags: &GlobalFlags,
    config: &SchemaformConfig,
) -> anyhow::Result<()> {
    let submission = run(args, config)?;
    output(&submission, flags.format)
}

pub fn run(args: &SubmitArgs, config: &SchemaformConfig) -> anyhow::Result<Submission> {
    let schema = read_schema(&args.schema)?;
    let original = read_values(&args.original, "original values")?;
    let edited = read_values(&args.edited, "edited values")?;

    let session = FlatFormSession::load(schema, original, FormOptions::from(config));
    let submission = match &args.out {
        Some(path) => {
            tracing::debug!(path = %path.display(), "writing submission values");
            session.submit(&edited, &mut FilePersistence { path: path.clone() })?
        }
        None => session.submit(&edited, &mut DiscardPersistence)?,
    };
    Ok(submission)
}
