//! Placeholder handling configuration.

use serde::{Deserialize, Serialize};

const fn default_enabled() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlaceholderConfig {
    /// When off, server values are shown and saved exactly as received:
    /// nothing is flattened, marked read-only or reverted.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
        }
    }
}
