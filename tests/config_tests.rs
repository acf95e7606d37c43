use std::fs;

use expense_core::{CategorySet, Config, ConfigManager, TrackerError};
use rust_decimal_macros::dec;
use tempfile::TempDir;

#[test]
fn missing_file_yields_defaults() {
    let temp = TempDir::new().expect("temp dir");
    let manager = ConfigManager::with_path(temp.path().join("config.json"));
    assert_eq!(manager.load().unwrap(), Config::default());
}

#[test]
fn save_then_load_preserves_settings() {
    let temp = TempDir::new().expect("temp dir");
    let manager = ConfigManager::with_path(temp.path().join("nested").join("config.json"));
    let config = Config {
        categories: CategorySet::new(["Rent", "Groceries", "Fun"]),
        currency_symbol: "£".into(),
        underspend_ratio: dec!(0.25),
    };
    manager.save(&config).unwrap();
    assert!(manager.path().exists());
    assert!(!manager.path().with_extension("json.tmp").exists());
    assert_eq!(manager.load().unwrap(), config);
}

#[test]
fn duplicate_categories_are_rejected_on_load() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("config.json");
    fs::write(&path, r#"{"categories": ["Rent", "Rent"]}"#).unwrap();
    let err = ConfigManager::with_path(&path).load().unwrap_err();
    assert!(matches!(err, TrackerError::Config(ref msg) if msg.contains("Rent")), "{err}");
}

#[test]
fn malformed_json_surfaces_serde_error() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("config.json");
    fs::write(&path, "{ not json").unwrap();
    let err = ConfigManager::with_path(&path).load().unwrap_err();
    assert!(matches!(err, TrackerError::Serde(_)));
}

#[test]
fn empty_category_list_cannot_be_saved() {
    let temp = TempDir::new().expect("temp dir");
    let manager = ConfigManager::with_path(temp.path().join("config.json"));
    let config = Config {
        categories: CategorySet::new(Vec::<String>::new()),
        ..Config::default()
    };
    assert!(matches!(manager.save(&config), Err(TrackerError::Config(_))));
    assert!(!manager.path().exists());
}
