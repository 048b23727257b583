//! Load-path validation tests for stocklist-config.
// stocklist-config/tests/load_validation.rs
// =============================================================================
// Module: Config Load Tests
// Description: Validate file resolution, limits, and store construction.
// Purpose: Ensure loading fails closed and absent defaults stay usable.
// =============================================================================

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use std::fs;

use stocklist_config::ConfigError;
use stocklist_config::ItemStoreBackend;
use stocklist_config::StocklistConfig;
use stocklist_core::ItemStore;
use stocklist_core::SortSpec;
use tempfile::TempDir;

#[test]
fn explicit_missing_file_is_an_io_error() {
    let temp = TempDir::new().unwrap();
    let result = StocklistConfig::load(Some(&temp.path().join("absent.toml")));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn explicit_file_parses_and_validates() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("stocklist.toml");
    let db_path = temp.path().join("items.sqlite");
    fs::write(
        &path,
        format!("[store]\nbackend = \"sqlite\"\npath = {:?}\n", db_path.display().to_string()),
    )
    .unwrap();
    let config = StocklistConfig::load(Some(&path)).unwrap();
    assert_eq!(config.store.backend, ItemStoreBackend::Sqlite);
}

#[test]
fn oversized_file_is_rejected() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("stocklist.toml");
    fs::write(&path, "# ".repeat(1024 * 1024)).unwrap();
    let result = StocklistConfig::load(Some(&path));
    assert!(matches!(result, Err(ConfigError::Invalid(_))));
}

#[test]
fn invalid_utf8_is_rejected() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("stocklist.toml");
    fs::write(&path, [0xff_u8, 0xfe, 0x00, 0x01]).unwrap();
    let result = StocklistConfig::load(Some(&path));
    assert!(matches!(result, Err(ConfigError::Invalid(_))));
}

#[test]
fn unknown_top_level_keys_are_a_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("stocklist.toml");
    fs::write(&path, "[storr]\nbackend = \"memory\"\n").unwrap();
    let result = StocklistConfig::load(Some(&path));
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn default_config_builds_a_working_memory_store() {
    let config = StocklistConfig::default();
    config.validate().unwrap();
    let store = config.build_store().unwrap();
    store.initialize().unwrap();
    store.insert("Pen", 5).unwrap();
    assert_eq!(store.list(SortSpec::NameAz).unwrap().len(), 1);
}

#[test]
fn sqlite_config_builds_a_durable_store() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("stocklist.toml");
    let db_path = temp.path().join("items.sqlite");
    fs::write(
        &path,
        format!("[store]\nbackend = \"sqlite\"\npath = {:?}\n", db_path.display().to_string()),
    )
    .unwrap();
    let config = StocklistConfig::load(Some(&path)).unwrap();
    {
        let store = config.build_store().unwrap();
        store.insert("Pen", 5).unwrap();
    }
    let store = config.build_store().unwrap();
    assert_eq!(store.list(SortSpec::NameAz).unwrap().len(), 1);
}

#[test]
fn sqlite_backend_pointing_at_a_directory_fails_to_build() {
    let temp = TempDir::new().unwrap();
    let mut config = StocklistConfig::default();
    config.store.backend = ItemStoreBackend::Sqlite;
    config.store.path = Some(temp.path().to_path_buf());
    let result = config.build_store();
    assert!(matches!(result, Err(ConfigError::Store(_))));
}
