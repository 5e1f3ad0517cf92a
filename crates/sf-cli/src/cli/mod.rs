use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `sfm` binary.
#[derive(Debug, Parser)]
#[command(
    name = "sfm",
    version,
    about = "schemaform - run the flat form value pipeline over JSON files"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Extra TOML config file, layered under environment variables
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            config: self.config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat};
    use crate::cli::root_commands::SchemaDocument;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "sfm",
            "--format",
            "raw",
            "--verbose",
            "defaults",
            "schema.json",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Defaults(ref args) if args.schema == PathBuf::from("schema.json")
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "sfm",
            "load",
            "schema.json",
            "values.json",
            "--quiet",
            "--config",
            "extra.toml",
        ])
        .expect("cli should parse");

        let flags = cli.global_flags();
        assert!(flags.quiet);
        assert_eq!(flags.config, Some(PathBuf::from("extra.toml")));
        assert_eq!(flags.format, OutputFormat::Json);
    }

    #[test]
    fn submit_takes_three_files_and_optional_output() {
        let cli = Cli::try_parse_from([
            "sfm",
            "submit",
            "schema.json",
            "original.json",
            "edited.json",
            "--out",
            "saved.json",
        ])
        .expect("cli should parse");

        match cli.command {
            Commands::Submit(args) => {
                assert_eq!(args.original, PathBuf::from("original.json"));
                assert_eq!(args.edited, PathBuf::from("edited.json"));
                assert_eq!(args.out, Some(PathBuf::from("saved.json")));
            }
            other => panic!("expected submit, got {other:?}"),
        }
    }

    #[test]
    fn schema_document_names_parse() {
        let cli =
            Cli::try_parse_from(["sfm", "schema", "prepared-form"]).expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Schema(ref args) if args.document == SchemaDocument::PreparedForm
        ));
        assert!(Cli::try_parse_from(["sfm", "schema", "bogus"]).is_err());
    }

    #[test]
    fn submit_requires_edited_values() {
        assert!(Cli::try_parse_from(["sfm", "submit", "schema.json", "original.json"]).is_err());
    }
}
