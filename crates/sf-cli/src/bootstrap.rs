use anyhow::Context;
use sf_config::SchemaformConfig;

use crate::cli::GlobalFlags;

/// Load configuration, layering `--config` between the project file and env.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<SchemaformConfig> {
    let config = match &flags.config {
        Some(path) => SchemaformConfig::load_with_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => SchemaformConfig::load_with_dotenv().context("failed to load configuration")?,
    };

    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}
