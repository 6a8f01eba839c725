//! Tests for client configuration

use std::fs;

use repulink::ClientConfig;
use repulink::config::{CacheConfig, ENV_API_URL, ENV_TOKEN, ENV_USER_ID};
use serial_test::serial;
use tempfile::TempDir;

// =============================================================================
// FILE TESTS
// =============================================================================

#[test]
fn test_config_default() {
    let config = ClientConfig::default();
    assert_eq!(config.api_url, "http://localhost:8000");
    assert_eq!(config.timeout().as_secs(), 30);
    assert!(config.token.is_none());
    assert_eq!(config.cache, CacheConfig::default());
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = ClientConfig::load_from(&dir.path().join("nope.toml"));
    assert_eq!(config, ClientConfig::default());
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = ClientConfig::default();
    config.api_url = "https://api.repulink.test".to_string();
    config.token = Some("tok".to_string());
    config.user_id = Some("u1".to_string());
    config.cache.endorsement_retries = Some(2);
    config.save_to(&path).unwrap();

    assert_eq!(ClientConfig::load_from(&path), config);
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "api_url = \"http://example.test\"\n\n[cache]\nsearch_stale_secs = 10\n").unwrap();

    let config = ClientConfig::load_from(&path);
    assert_eq!(config.api_url, "http://example.test");
    assert_eq!(config.timeout_secs, 30);
    assert_eq!(config.cache.search_stale_secs, Some(10));
    assert_eq!(config.cache.endorsement_retries, None);
}

#[test]
fn test_malformed_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "api_url = [not toml").unwrap();

    assert_eq!(ClientConfig::load_from(&path), ClientConfig::default());
}

// =============================================================================
// OVERRIDE TESTS
// =============================================================================

#[test]
fn test_overrides_skip_blank_values() {
    let config = ClientConfig::default().with_overrides(
        Some("http://override.test".to_string()),
        Some("  ".to_string()),
        None,
    );
    assert_eq!(config.api_url, "http://override.test");
    assert!(config.token.is_none());
}

#[test]
fn test_session_from_config() {
    let mut config = ClientConfig::default();
    config.token = Some("tok".to_string());
    config.user_id = Some("u1".to_string());

    let session = config.session();
    assert_eq!(session.authorization().as_deref(), Some("Bearer tok"));
    assert_eq!(session.viewer_id(), Some("u1"));
}

#[test]
#[serial]
fn test_env_overrides_file() {
    // SAFETY: serialized with the other env tests
    unsafe {
        std::env::set_var(ENV_API_URL, "http://env.test");
        std::env::set_var(ENV_TOKEN, "env-token");
        std::env::set_var(ENV_USER_ID, "env-user");
    }

    let mut file = ClientConfig::default();
    file.api_url = "http://file.test".to_string();
    let config = file.with_env();

    // SAFETY: as above
    unsafe {
        std::env::remove_var(ENV_API_URL);
        std::env::remove_var(ENV_TOKEN);
        std::env::remove_var(ENV_USER_ID);
    }

    assert_eq!(config.api_url, "http://env.test");
    assert_eq!(config.token.as_deref(), Some("env-token"));
    assert_eq!(config.user_id.as_deref(), Some("env-user"));
}

#[test]
#[serial]
fn test_no_env_keeps_file_values() {
    // SAFETY: serialized with the other env tests
    unsafe {
        std::env::remove_var(ENV_API_URL);
        std::env::remove_var(ENV_TOKEN);
        std::env::remove_var(ENV_USER_ID);
    }

    let mut file = ClientConfig::default();
    file.api_url = "http://file.test".to_string();
    let config = file.clone().with_env();

    assert_eq!(config, file);
}
