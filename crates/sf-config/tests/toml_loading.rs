//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed file and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use sf_config::{ConfigError, SchemaformConfig};

#[test]
fn loads_form_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[form]
password_format = "secret"
keep_falsy_defaults = true
validate_on_save = true
"#,
        )?;

        let config: SchemaformConfig =
            Figment::from(Serialized::defaults(SchemaformConfig::default()))
                .merge(Toml::file("config.toml"))
                .extract()?;

        assert_eq!(config.form.password_format, "secret");
        assert!(config.form.keep_falsy_defaults);
        assert!(config.form.validate_on_save);
        assert!(config.placeholders.enabled);
        Ok(())
    });
}

#[test]
fn loads_placeholder_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r"
[placeholders]
enabled = false
",
        )?;

        let config: SchemaformConfig =
            Figment::from(Serialized::defaults(SchemaformConfig::default()))
                .merge(Toml::file("config.toml"))
                .extract()?;

        assert!(!config.placeholders.enabled);
        assert_eq!(config.form.password_format, "password");
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".schemaform")?;
        jail.create_file(
            ".schemaform/config.toml",
            r"
[form]
keep_falsy_defaults = true
",
        )?;

        let config = SchemaformConfig::load().expect("config loads");
        assert!(config.form.keep_falsy_defaults);
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[form]
password_format = "secret"
"#,
        )?;
        jail.set_env("SCHEMAFORM_FORM__PASSWORD_FORMAT", "credential");

        let config: SchemaformConfig =
            Figment::from(Serialized::defaults(SchemaformConfig::default()))
                .merge(Toml::file("config.toml"))
                .merge(Env::prefixed("SCHEMAFORM_").split("__"))
                .extract()?;

        assert_eq!(config.form.password_format, "credential");
        Ok(())
    });
}

#[test]
fn explicit_file_is_layered_under_env() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "custom.toml",
            r"
[form]
validate_on_save = true

[placeholders]
enabled = false
",
        )?;
        jail.set_env("SCHEMAFORM_PLACEHOLDERS__ENABLED", "true");

        let config = SchemaformConfig::load_with_file(std::path::Path::new("custom.toml"))
            .expect("config loads");
        assert!(config.form.validate_on_save);
        assert!(config.placeholders.enabled);
        Ok(())
    });
}

#[test]
fn blank_password_format_fails_validation() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[form]
password_format = ""
"#,
        )?;

        let figment = Figment::from(Serialized::defaults(SchemaformConfig::default()))
            .merge(Toml::file("config.toml"));
        let result = SchemaformConfig::from_figment(&figment);
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        Ok(())
    });
}

#[test]
fn mistyped_value_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[placeholders]
enabled = "sometimes"
"#,
        )?;

        let figment = Figment::from(Serialized::defaults(SchemaformConfig::default()))
            .merge(Toml::file("config.toml"));
        let result = SchemaformConfig::from_figment(&figment);
        assert!(matches!(result, Err(ConfigError::Figment(_))));
        Ok(())
    });
}
