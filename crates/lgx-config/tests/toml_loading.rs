//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use lgx_config::LogixConfig;

#[test]
fn loads_api_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://ops.example.in/api"
timeout_secs = 30
user_agent = "logix-test"
"#,
        )?;

        let config: LogixConfig = Figment::from(Serialized::defaults(LogixConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.base_url, "https://ops.example.in/api");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.api.user_agent, "logix-test");
        Ok(())
    });
}

#[test]
fn loads_general_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
default_limit = 10
default_hub = "hub-pnq"
"#,
        )?;

        let config: LogixConfig = Figment::from(Serialized::defaults(LogixConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.default_limit, 10);
        assert_eq!(config.general.default_hub(), Some("hub-pnq"));
        // Untouched section keeps defaults
        assert_eq!(config.api.timeout_secs, 15);
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
base_url = "https://from-toml.example.in"
"#,
        )?;
        jail.set_env("LOGIX_API__BASE_URL", "https://from-env.example.in");

        let config: LogixConfig = Figment::from(Serialized::defaults(LogixConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("LOGIX_").split("__"))
            .extract()?;

        assert_eq!(config.api.base_url, "https://from-env.example.in");
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".logix")?;
        jail.create_file(
            ".logix/config.toml",
            r#"
[general]
default_hub = "hub-local"
"#,
        )?;

        let config = LogixConfig::load().expect("config loads");
        assert_eq!(config.general.default_hub(), Some("hub-local"));
        Ok(())
    });
}

#[test]
fn invalid_base_url_is_rejected_on_load() {
    Jail::expect_with(|jail| {
        jail.set_env("LOGIX_API__BASE_URL", "ftp://nope");
        let result = LogixConfig::load();
        assert!(result.is_err());
        Ok(())
    });
}
