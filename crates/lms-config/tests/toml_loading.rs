//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use lms_config::LmsConfig;
use pretty_assertions::assert_eq;

#[test]
fn loads_api_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://lms.example.com/"
timeout_secs = 10
user_agent = "lms-test"
"#,
        )?;

        let config: LmsConfig = Figment::from(Serialized::defaults(LmsConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.base_url, "https://lms.example.com/");
        assert_eq!(config.api.normalized_base_url(), "https://lms.example.com");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.api.user_agent, "lms-test");
        assert!(config.api.validate().is_ok());
        Ok(())
    });
}

#[test]
fn loads_auth_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[auth]
token = "toml-token"
admin_id = 7
email = "admin@example.com"
"#,
        )?;

        let config: LmsConfig = Figment::from(Serialized::defaults(LmsConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.auth.token, "toml-token");
        assert_eq!(config.auth.admin_id, Some(7));
        assert_eq!(config.auth.email, "admin@example.com");
        assert!(config.auth.is_configured());
        Ok(())
    });
}

#[test]
fn partial_sections_keep_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
keep_one_draft = false
"#,
        )?;

        let config: LmsConfig = Figment::from(Serialized::defaults(LmsConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!(!config.general.keep_one_draft);
        assert_eq!(config.general.default_limit, 20);
        assert_eq!(config.api.base_url, "http://localhost:3000");
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://from-toml.example.com"
"#,
        )?;
        jail.set_env("LMS_API__BASE_URL", "https://from-env.example.com");
        jail.set_env("LMS_API__TIMEOUT_SECS", "5");

        let config: LmsConfig = Figment::from(Serialized::defaults(LmsConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("LMS_").split("__"))
            .extract()?;

        assert_eq!(config.api.base_url, "https://from-env.example.com");
        assert_eq!(config.api.timeout_secs, 5);
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".lms")?;
        jail.create_file(
            ".lms/config.toml",
            r#"
[general]
default_limit = 50
"#,
        )?;

        let config = LmsConfig::load().expect("config loads");
        assert_eq!(config.general.default_limit, 50);
        Ok(())
    });
}

#[test]
fn invalid_type_is_reported() {
    Jail::expect_with(|jail| {
        jail.set_env("LMS_API__TIMEOUT_SECS", "soon");
        let result = LmsConfig::load();
        assert!(result.is_err());
        Ok(())
    });
}
