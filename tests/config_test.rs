//! 設定ファイルのテスト

use pop_maker::config::Config;
use pop_maker_common::DEFAULT_BASE_URL;
use tempfile::tempdir;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.timeout_seconds, 300);
}

#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let mut config = Config::default();
    config.set_base_url("http://localhost:5001/demo/us-central1/".into()).unwrap();
    config.set_timeout(30).unwrap();
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(
        loaded.endpoints().base_url(),
        "http://localhost:5001/demo/us-central1"
    );
    assert_eq!(loaded.timeout().as_secs(), 30);
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"timeout_seconds": 10}"#).unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.timeout_seconds, 10);
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
}

#[test]
fn test_saved_file_has_only_cli_settings() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    Config::default().save_to(&path).unwrap();

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let keys: Vec<&str> = saved.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["base_url", "timeout_seconds"]);
}

#[test]
fn test_unknown_keys_are_ignored() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"timeout_seconds": 20, "auto_hide_seconds": 6}"#).unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.timeout_seconds, 20);
}
