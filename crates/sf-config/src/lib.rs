//! # sf-config
//!
//! Layered configuration loading for schemaform using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SCHEMAFORM_*` prefix, `__` as separator)
//! 2. Project-level `.schemaform/config.toml`
//! 3. User-level `~/.config/schemaform/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! `SCHEMAFORM_FORM__PASSWORD_FORMAT` -> `form.password_format`,
//! `SCHEMAFORM_PLACEHOLDERS__ENABLED` -> `placeholders.enabled`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use sf_config::SchemaformConfig;
//!
//! let config = SchemaformConfig::load_with_dotenv().expect("config");
//! if config.placeholders.enabled {
//!     println!("password format: {}", config.form.password_format);
//! }
//! ```

mod error;
mod form;
mod placeholders;

pub use error::ConfigError;
pub use form::FormConfig;
pub use placeholders::PlaceholderConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix for all schemaform settings.
pub const ENV_PREFIX: &str = "SCHEMAFORM_";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SchemaformConfig {
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub placeholders: PlaceholderConfig,
}

impl SchemaformConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` on unreadable or mistyped sources and
    /// `ConfigError::InvalidValue` when a loaded value is unusable.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Load configuration with an additional TOML file layered between the
    /// project file and the environment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`]. A missing `extra` file is an error here, unlike
    /// the implicit global and project files.
    pub fn load_with_file(extra: &Path) -> Result<Self, ConfigError> {
        if !extra.exists() {
            return Err(ConfigError::MissingFile(extra.to_path_buf()));
        }
        let figment = Self::base_figment()
            .merge(Toml::file(extra))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));
        Self::from_figment(&figment)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or layer extra
    /// providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::base_figment().merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the form pipeline cannot work with.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.form.validate()
    }

    /// Defaults plus the global and project TOML files, without env.
    fn base_figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".schemaform/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("schemaform").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SchemaformConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.form.password_format, "password");
        assert!(!config.form.keep_falsy_defaults);
        assert!(!config.form.validate_on_save);
        assert!(config.placeholders.enabled);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config = SchemaformConfig::from_figment(&SchemaformConfig::figment())
                .expect("should extract defaults");
            assert_eq!(config, SchemaformConfig::default());
            Ok(())
        });
    }

    #[test]
    fn load_with_missing_file_fails() {
        let err = SchemaformConfig::load_with_file(Path::new("/nonexistent/schemaform.toml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingFile(_)));
    }
}
