//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files.
//!
//! **Coverage:**
//! - JSON and TOML files with every section present
//! - Partial files keep defaults for missing keys
//! - Malformed and unsupported files surface as config errors

use std::path::PathBuf;
use std::time::Duration;

use baitulmal_domain::constants::DEFAULT_API_URL;
use baitulmal_domain::BaitulMalError;
use baitulmal_infra::config;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write config file");
    path
}

#[test]
fn test_load_config_from_json_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write(
        &dir,
        "baitulmal.json",
        r#"{
            "api": {
                "base_url": "https://staging.baitulmal.ba",
                "timeout_secs": 12
            },
            "storage": {
                "path": "/var/lib/baitulmal/state.json"
            }
        }"#,
    );

    let config = config::load_from_file(Some(path)).expect("Failed to load JSON config");

    assert_eq!(config.api.base_url, "https://staging.baitulmal.ba");
    assert_eq!(config.api.timeout(), Duration::from_secs(12));
    assert_eq!(config.storage.path, PathBuf::from("/var/lib/baitulmal/state.json"));
}

#[test]
fn test_load_config_from_toml_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write(
        &dir,
        "config.toml",
        r#"
[api]
base_url = "http://localhost:5000"
timeout_secs = 3

[storage]
path = "dev-state.json"
"#,
    );

    let config = config::load_from_file(Some(path)).expect("Failed to load TOML config");

    assert_eq!(config.api.base_url, "http://localhost:5000");
    assert_eq!(config.api.timeout_secs, 3);
    assert_eq!(config.storage.path, PathBuf::from("dev-state.json"));
}

#[test]
fn test_partial_file_keeps_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write(&dir, "baitulmal.toml", "[storage]\npath = \"only-storage.json\"\n");

    let config = config::load_from_file(Some(path)).expect("Failed to load partial config");

    assert_eq!(config.api.base_url, DEFAULT_API_URL);
    assert_eq!(config.api.timeout_secs, 30);
    assert_eq!(config.storage.path, PathBuf::from("only-storage.json"));
}

#[test]
fn test_malformed_file_is_config_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let json = write(&dir, "config.json", r#"{ "api": { "base_url": "#);
    let toml = write(&dir, "config.toml", "[api\nbase_url = 1");
    let yaml = write(&dir, "config.yaml", "api: {}");

    for path in [json, toml, yaml] {
        let err = config::load_from_file(Some(path.clone())).unwrap_err();
        assert!(
            matches!(err, BaitulMalError::Config(_)),
            "{} should be rejected, got {err:?}",
            path.display()
        );
    }
}
