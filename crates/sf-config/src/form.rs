//! Form pipeline configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default schema `format` that marks a password-like attribute.
fn default_password_format() -> String {
    "password".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FormConfig {
    /// Schema `format` value identifying password-like attributes.
    #[serde(default = "default_password_format")]
    pub password_format: String,

    /// Keep `0`, `false`, `""` and `null` defaults instead of treating them
    /// as absent.
    #[serde(default)]
    pub keep_falsy_defaults: bool,

    /// Validate submitted values against the rendered schema before save.
    #[serde(default)]
    pub validate_on_save: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            password_format: default_password_format(),
            keep_falsy_defaults: false,
            validate_on_save: false,
        }
    }
}

impl FormConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.password_format.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "form.password_format".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = FormConfig::default();
        assert_eq!(config.password_format, "password");
        assert!(!config.keep_falsy_defaults);
        assert!(!config.validate_on_save);
    }

    #[test]
    fn blank_password_format_is_rejected() {
        let config = FormConfig {
            password_format: "  ".to_string(),
            ..FormConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref field, .. } if field == "form.password_format"
        ));
    }
}
