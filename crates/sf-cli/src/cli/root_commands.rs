use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Print the defaults a schema declares.
    Defaults(DefaultsArgs),
    /// Prepare a form for rendering from a schema and server values.
    Load(LoadArgs),
    /// Compute what would be persisted for edited values.
    Submit(SubmitArgs),
    /// Print the JSON Schema of an sfm output document.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct DefaultsArgs {
    /// Schema JSON file.
    pub schema: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct LoadArgs {
    /// Schema JSON file.
    pub schema: PathBuf,
    /// Server values JSON file.
    pub values: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct SubmitArgs {
    /// Schema JSON file.
    pub schema: PathBuf,
    /// Server values the form was loaded with.
    pub original: PathBuf,
    /// Values as edited in the form.
    pub edited: PathBuf,
    /// Write the persisted values to this file as well.
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaDocument {
    /// Output of `sfm load`.
    PreparedForm,
    /// Output of `sfm submit`.
    Submission,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Which document to describe.
    pub document: SchemaDocument,
}
