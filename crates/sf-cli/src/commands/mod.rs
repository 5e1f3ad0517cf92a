use sf_config::SchemaformConfig;

use crate::cli::{Commands, GlobalFlags};

pub mod defaults;
pub mod load;
pub mod schema;
pub mod submit;

/// Route a parsed command to its handler.
pub fn dispatch(
    command: &Commands,
    flags: &GlobalFlags,
    config: &SchemaformConfig,
) -> anyhow::Result<()> {
    match command {
        Commands::Defaults(args) => defaults::handle(args, flags, config),
        Commands::Load(args) => load::handle(args, flags, config),
        Commands::Submit(args) => submit::handle(args, flags, config),
        Commands::Schema(args) => schema::handle(args, flags),
    }
}
