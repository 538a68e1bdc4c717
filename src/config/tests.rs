//! Configuration tests
//!
//! The template tests guard `to_toml()`: when you add a field to FileConfig,
//! they fail until the template writes it.

use super::*;
use std::collections::HashMap;

fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

fn no_env() -> impl Fn(&str) -> Option<String> {
    env_of(&[])
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

/// The default template must parse back into the file layer.
#[test]
fn test_config_roundtrip_default() {
    let toml_str = Config::default().to_toml();
    let parsed = Config::parse_file_config(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );
}

/// Loading the written template yields the config that wrote it.
#[test]
fn test_template_reproduces_config() {
    let mut config = Config::default();
    config.api_url = "https://sho.rt".to_string();
    config.request_timeout_secs = 3;
    config.theme = "light".to_string();
    config.logging.level = "debug".to_string();
    config.logging.file_enabled = true;
    config.logging.file_rotation = LogRotation::Hourly;
    config.logging.file_prefix = "client".to_string();

    let file = Config::parse_file_config(&config.to_toml()).unwrap();
    let loaded = Config::from_layers(file, no_env()).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_template_writes_every_file_key() {
    let template = Config::default().to_toml();
    for key in [
        "api_url =",
        "request_timeout_secs =",
        "theme =",
        "[logging]",
        "level =",
        "file_enabled =",
        "file_dir =",
        "file_rotation =",
        "file_prefix =",
    ] {
        assert!(template.contains(key), "template is missing `{}`", key);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Layering
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_defaults_without_file_or_env() {
    let config = Config::from_layers(FileConfig::default(), no_env()).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.api_url, "http://localhost:80");
    assert_eq!(config.request_timeout(), Duration::from_secs(10));
    assert!(config.enable_tui);
    assert!(!config.demo_mode);
}

#[test]
fn test_file_overrides_defaults() {
    let file = Config::parse_file_config(
        r#"
api_url = "https://file.example"
request_timeout_secs = 4
"#,
    )
    .unwrap();
    let config = Config::from_layers(file, no_env()).unwrap();
    assert_eq!(config.api_url, "https://file.example");
    assert_eq!(config.request_timeout_secs, 4);
    assert_eq!(config.theme, "dark");
}

#[test]
fn test_env_overrides_file() {
    let file = Config::parse_file_config(
        r#"
api_url = "https://file.example"
request_timeout_secs = 4
theme = "light"
"#,
    )
    .unwrap();
    let env = env_of(&[
        ("SHORTURL_API_URL", "http://env.example:8080"),
        ("SHORTURL_TIMEOUT_SECS", "7"),
        ("SHORTURL_THEME", "dark"),
    ]);
    let config = Config::from_layers(file, env).unwrap();
    assert_eq!(config.api_url, "http://env.example:8080");
    assert_eq!(config.request_timeout_secs, 7);
    assert_eq!(config.theme, "dark");
}

#[test]
fn test_unparsable_or_zero_timeout_falls_back() {
    let file = Config::parse_file_config("request_timeout_secs = 0").unwrap();
    let env = env_of(&[("SHORTURL_TIMEOUT_SECS", "soon")]);
    let config = Config::from_layers(file, env).unwrap();
    assert_eq!(config.request_timeout_secs, 10);
}

#[test]
fn test_runtime_flags() {
    let config = Config::from_layers(
        FileConfig::default(),
        env_of(&[("SHORTURL_NO_TUI", "1"), ("SHORTURL_DEMO", "TRUE")]),
    )
    .unwrap();
    assert!(!config.enable_tui);
    assert!(config.demo_mode);

    let config = Config::from_layers(
        FileConfig::default(),
        env_of(&[("SHORTURL_NO_TUI", "0"), ("SHORTURL_DEMO", "no")]),
    )
    .unwrap();
    assert!(config.enable_tui);
    assert!(!config.demo_mode);
}

#[test]
fn test_invalid_api_url_is_an_error() {
    let env = env_of(&[("SHORTURL_API_URL", "not a url")]);
    assert!(Config::from_layers(FileConfig::default(), env).is_err());

    let env = env_of(&[("SHORTURL_API_URL", "ftp://files.example")]);
    let err = Config::from_layers(FileConfig::default(), env).unwrap_err();
    assert!(err.to_string().contains("unsupported scheme"));
}

#[test]
fn test_malformed_file_is_an_error() {
    assert!(Config::parse_file_config("api_url = ").is_err());
    assert!(Config::parse_file_config("request_timeout_secs = \"ten\"").is_err());
}

// ─────────────────────────────────────────────────────────────────────────────
// Logging section
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_partial_logging_section_keeps_defaults() {
    let file = Config::parse_file_config(
        r#"
[logging]
file_enabled = true
file_rotation = "NEVER"
"#,
    )
    .unwrap();
    let config = Config::from_layers(file, no_env()).unwrap();
    assert!(config.logging.file_enabled);
    assert_eq!(config.logging.file_rotation, LogRotation::Never);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file_prefix, "shorturl");
}

#[test]
fn test_unknown_rotation_defaults_to_daily() {
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
    assert_eq!(LogRotation::parse("Hourly"), LogRotation::Hourly);
}
