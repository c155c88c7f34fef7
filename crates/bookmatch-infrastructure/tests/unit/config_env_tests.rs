//! Environment Override Tests
//!
//! These tests mutate process environment variables and must run sequentially:
//!
//! ```bash
//! cargo test -p bookmatch-infrastructure --test unit config_env -- --test-threads=1 --ignored
//! ```
//!
//! # Safety
//!
//! `env::set_var`/`env::remove_var` are `unsafe` in Rust 2024 because other
//! threads may read the environment concurrently; `--test-threads=1` rules
//! that out.

use bookmatch_infrastructure::config::ConfigLoader;
use std::env;
use std::fs;
use tempfile::TempDir;

fn set_env(key: &str, value: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::set_var(key, value);
    }
}

fn remove_env(key: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::remove_var(key);
    }
}

fn loader_without_file(dir: &TempDir) -> ConfigLoader {
    ConfigLoader::new().with_config_path(dir.path().join("absent.toml"))
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_nested_env_vars_override_defaults() {
    let dir = TempDir::new().unwrap();
    set_env("BOOKMATCH_CACHE__PROVIDER", "null");
    set_env("BOOKMATCH_RECOMMENDATIONS__USER_TTL_SECS", "120");

    let config = loader_without_file(&dir).load();

    remove_env("BOOKMATCH_CACHE__PROVIDER");
    remove_env("BOOKMATCH_RECOMMENDATIONS__USER_TTL_SECS");

    let config = config.expect("config should load");
    assert_eq!(config.cache.provider, "null");
    assert_eq!(config.recommendations.user_ttl_secs, 120);
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_vars_override_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bookmatch.toml");
    fs::write(&path, "[recommendations]\nmax_limit = 40\n").unwrap();
    set_env("BOOKMATCH_RECOMMENDATIONS__MAX_LIMIT", "25");

    let config = ConfigLoader::new().with_config_path(&path).load();

    remove_env("BOOKMATCH_RECOMMENDATIONS__MAX_LIMIT");

    assert_eq!(config.expect("config should load").recommendations.max_limit, 25);
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_can_switch_to_remote_mode() {
    let dir = TempDir::new().unwrap();
    set_env("BOOKMATCH_RECOMMENDATIONS__MODE", "remote");
    set_env(
        "BOOKMATCH_RECOMMENDATIONS__REMOTE__BASE_URL",
        "http://recs.internal:8000",
    );

    let config = loader_without_file(&dir).load();

    remove_env("BOOKMATCH_RECOMMENDATIONS__MODE");
    remove_env("BOOKMATCH_RECOMMENDATIONS__REMOTE__BASE_URL");

    let config = config.expect("config should load");
    assert_eq!(
        config.recommendations.remote.base_url.as_deref(),
        Some("http://recs.internal:8000")
    );
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_custom_prefix_ignores_default_prefix() {
    let dir = TempDir::new().unwrap();
    set_env("BOOKMATCH_CACHE__PROVIDER", "null");
    set_env("RECS_CACHE__PROVIDER", "redis");
    set_env("RECS_CACHE__REDIS_URL", "redis://cache:6379");

    let config = loader_without_file(&dir).with_env_prefix("RECS").load();

    remove_env("BOOKMATCH_CACHE__PROVIDER");
    remove_env("RECS_CACHE__PROVIDER");
    remove_env("RECS_CACHE__REDIS_URL");

    let config = config.expect("config should load");
    assert_eq!(config.cache.provider, "redis");
    assert_eq!(config.cache.redis_url.as_deref(), Some("redis://cache:6379"));
}
