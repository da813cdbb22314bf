//! Environment override tests
//!
//! These tests modify environment variables and must run sequentially:
//!
//! ```bash
//! cargo test -p wgb-infrastructure --test integration env_test -- --test-threads=1 --ignored
//! ```
//!
//! # Safety
//!
//! Rust 2024 requires `unsafe` for `env::set_var`/`env::remove_var`.

use std::env;

use wgb_infrastructure::config::loader::ConfigLoader;

/// Helper to set env var safely
fn set_env(key: &str, value: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::set_var(key, value);
    }
}

/// Helper to remove env var safely
fn remove_env(key: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::remove_var(key);
    }
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_overrides_nested_keys() {
    set_env("WGB_ENVTEST_GRAPH__EAGER", "true");
    set_env("WGB_ENVTEST_GRAPH__SORT_SIBLINGS", "false");
    set_env("WGB_ENVTEST_LOGGING__LEVEL", "warn");

    let config = ConfigLoader::new()
        .with_env_prefix("WGB_ENVTEST")
        .load()
        .expect("Should load config");

    assert!(config.graph.eager);
    assert!(!config.graph.sort_siblings);
    assert_eq!(config.logging.level, "warn");

    remove_env("WGB_ENVTEST_GRAPH__EAGER");
    remove_env("WGB_ENVTEST_GRAPH__SORT_SIBLINGS");
    remove_env("WGB_ENVTEST_LOGGING__LEVEL");
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_invalid_log_level_fails() {
    set_env("WGB_ENVTEST_LOGGING__LEVEL", "chatty");

    let result = ConfigLoader::new().with_env_prefix("WGB_ENVTEST").load();

    remove_env("WGB_ENVTEST_LOGGING__LEVEL");
    assert!(result.is_err());
}
