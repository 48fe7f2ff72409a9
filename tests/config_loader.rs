//! Config loading against temp files.

use std::fs;

use cinescope::config::{Config, ConfigError};
use tempfile::tempdir;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();

    assert_eq!(config.catalog.base_url, "https://api.themoviedb.org/3");
    assert_eq!(config.catalog.request_timeout_seconds, 30);
    assert_eq!(config.defaults.language, "en");
    assert_eq!(config.defaults.category, "popular");
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[defaults]\nlanguage = \"fr\"\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.defaults.language, "fr");
    assert_eq!(config.defaults.category, "popular");
    assert_eq!(config.catalog.connect_timeout_seconds, 5);
}

#[test]
fn api_key_can_come_from_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[catalog]\napi_key = \"from-file\"\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.catalog.api_key.as_deref(), Some("from-file"));
}

#[test]
fn unparseable_file_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "not toml [").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn unknown_default_category_fails_validation() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[defaults]\ncategory = \"bestest\"\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Validation { .. }));
}

#[test]
fn empty_base_url_fails_validation() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[catalog]\nbase_url = \"\"\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Validation { .. }));
}

#[test]
fn zero_timeout_fails_validation() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[catalog]\nrequest_timeout_seconds = 0\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Validation { .. }));
}
