//! Store config validation tests for stocklist-config.
// stocklist-config/tests/store_validation.rs
// =============================================================================
// Module: Store Config Validation Tests
// Description: Validate item store backend constraints.
// Purpose: Ensure store configuration remains fail-closed and deterministic.
// =============================================================================

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use std::path::PathBuf;

use stocklist_config::ConfigError;
use stocklist_config::ItemStoreBackend;

mod common;

type TestResult = Result<(), String>;

fn assert_invalid(result: Result<(), ConfigError>, needle: &str) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(()) => Err("expected invalid config".to_string()),
    }
}

#[test]
fn defaults_select_the_memory_backend() -> TestResult {
    let config = common::minimal_config().map_err(|err| err.to_string())?;
    if config.store.backend != ItemStoreBackend::Memory {
        return Err("expected memory backend by default".to_string());
    }
    if config.store.path.is_some() {
        return Err("expected no path by default".to_string());
    }
    config.validate().map_err(|err| err.to_string())
}

#[test]
fn memory_backend_rejects_path() -> TestResult {
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    config.store.backend = ItemStoreBackend::Memory;
    config.store.path = Some(PathBuf::from("items.db"));
    assert_invalid(config.validate(), "memory store must not set path")
}

#[test]
fn sqlite_backend_requires_path() -> TestResult {
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    config.store.backend = ItemStoreBackend::Sqlite;
    config.store.path = None;
    assert_invalid(config.validate(), "sqlite store requires path")
}

#[test]
fn sqlite_backend_rejects_overlong_path_component() -> TestResult {
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    config.store.backend = ItemStoreBackend::Sqlite;
    config.store.path = Some(PathBuf::from("x".repeat(300)));
    assert_invalid(config.validate(), "store path component too long")
}

#[test]
fn sqlite_backend_parses_from_toml() -> TestResult {
    let config = common::config_from_toml(
        "[store]\nbackend = \"sqlite\"\npath = \"items.sqlite\"\njournal_mode = \"delete\"\n",
    )
    .map_err(|err| err.to_string())?;
    if config.store.backend != ItemStoreBackend::Sqlite {
        return Err("expected sqlite backend".to_string());
    }
    config.validate().map_err(|err| err.to_string())
}

#[test]
fn unknown_store_keys_are_rejected() -> TestResult {
    let result = common::config_from_toml("[store]\nbakend = \"sqlite\"\n");
    if result.is_ok() {
        return Err("expected unknown key rejection".to_string());
    }
    Ok(())
}
