//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_parse_error() {
    let result = load_from_path(Path::new("/tmp/nonexistent_marco_config.toml"));
    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(matches!(err, marco_common::ConfigError::ParseError(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[service]
base_url = "https://assist.example.com"
request_timeout_secs = 30

[history]
limit = 25
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.service.base_url, "https://assist.example.com");
    assert_eq!(config.service.request_timeout_secs, 30);
    assert_eq!(config.history.limit, 25);
    // Defaults preserved
    assert_eq!(config.service.connect_timeout_secs, 10);
    assert_eq!(config.logging.level, "marco=info");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(matches!(err, marco_common::ConfigError::ParseError(_)));
}

#[test]
fn load_config_with_out_of_range_values_returns_them_as_parsed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[history]
limit = 500
"#,
    )
    .unwrap();

    // Validation warns but the parsed config is returned as-is
    let config = load_from_path(&path).unwrap();
    assert_eq!(config.history.limit, 500);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("marco").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.service.base_url, "http://localhost:8000");
    assert_eq!(config.history.limit, 10);
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::MarcoConfig;

    let content = default_config_toml();
    let config: MarcoConfig = toml::from_str(&content).unwrap();
    assert_eq!(config.service.base_url, "http://localhost:8000");
}

#[test]
fn default_config_path_is_reasonable() {
    // This may not work in all CI environments, but should work locally
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("marco"));
        assert!(path_str.ends_with("config.toml"));
    }
}
