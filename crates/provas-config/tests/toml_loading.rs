//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use provas_config::ProvasConfig;

#[test]
fn loads_api_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://provas.example.com/"
token = "tok-123"
timeout_secs = 30

[general]
default_depth = 2
"#,
        )?;

        let config: ProvasConfig = Figment::from(Serialized::defaults(ProvasConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.base_url, "https://provas.example.com/");
        assert_eq!(config.api.token, "tok-123");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.general.default_depth, Some(2));
        assert!(config.api.has_token());
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[api]\ntoken = \"abc\"\n")?;

        let config: ProvasConfig = Figment::from(Serialized::defaults(ProvasConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.base_url, "http://localhost:5000/");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.api.token, "abc");
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".provas")?;
        jail.create_file(
            ".provas/config.toml",
            "[api]\nbase_url = \"http://127.0.0.1:9000/\"\n",
        )?;

        let config = ProvasConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "http://127.0.0.1:9000/");
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[api]\ntoken = \"from-toml\"\n")?;
        jail.set_env("PROVAS_API__TOKEN", "from-env");

        let config: ProvasConfig = Figment::from(Serialized::defaults(ProvasConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("PROVAS_").split("__"))
            .extract()?;

        assert_eq!(config.api.token, "from-env");
        Ok(())
    });
}
