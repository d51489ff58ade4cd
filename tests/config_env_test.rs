//! Config environment variable tests
//!
//! These tests verify that Config::from_env() correctly reads and applies
//! environment variable overrides. Config::from_env() also loads from a
//! .env file via dotenvy, so these tests focus on override behavior.
//!
//! Tests use #[serial] to prevent race conditions with shared env vars.

use serial_test::serial;
use std::env;

use wikichar::config::{Config, LogFormat};

#[test]
#[serial]
fn test_config_defaults() {
    for key in [
        "WIKIDATA_API_URL",
        "WIKIDATA_SPARQL_URL",
        "WIKIDATA_LANGUAGE",
        "API_TIMEOUT_MS",
        "SPARQL_TIMEOUT_MS",
        "CACHE_CAPACITY",
        "LOG_FORMAT",
    ] {
        env::remove_var(key);
    }

    let config = Config::from_env().unwrap();
    assert_eq!(config.wikidata.api_url, "https://www.wikidata.org/w/api.php");
    assert_eq!(config.wikidata.sparql_url, "https://query.wikidata.org/sparql");
    assert_eq!(config.wikidata.language, "en");
    assert_eq!(config.request.api_timeout_ms, 5000);
    assert_eq!(config.request.sparql_timeout_ms, 10000);
    assert_eq!(config.cache.capacity, 1000);
    assert_eq!(config.logging.format, LogFormat::Pretty);
}

#[test]
#[serial]
fn test_config_custom_endpoints_and_language() {
    env::set_var("WIKIDATA_API_URL", "https://test.wikidata.org/w/api.php");
    env::set_var("WIKIDATA_LANGUAGE", "de");

    let config = Config::from_env().unwrap();
    assert_eq!(config.wikidata.api_url, "https://test.wikidata.org/w/api.php");
    assert_eq!(config.wikidata.language, "de");

    env::remove_var("WIKIDATA_API_URL");
    env::remove_var("WIKIDATA_LANGUAGE");
}

#[test]
#[serial]
fn test_config_custom_timeouts_and_cache() {
    env::set_var("API_TIMEOUT_MS", "2500");
    env::set_var("SPARQL_TIMEOUT_MS", "20000");
    env::set_var("CACHE_CAPACITY", "50");

    let config = Config::from_env().unwrap();
    assert_eq!(config.request.api_timeout_ms, 2500);
    assert_eq!(config.request.sparql_timeout_ms, 20000);
    assert_eq!(config.cache.capacity, 50);

    env::remove_var("API_TIMEOUT_MS");
    env::remove_var("SPARQL_TIMEOUT_MS");
    env::remove_var("CACHE_CAPACITY");
}

#[test]
#[serial]
fn test_config_rejects_zero_cache_capacity() {
    env::set_var("CACHE_CAPACITY", "0");

    let result = Config::from_env();
    assert!(result.is_err());

    env::remove_var("CACHE_CAPACITY");
}

#[test]
#[serial]
fn test_config_json_log_format() {
    env::set_var("LOG_FORMAT", "json");

    let config = Config::from_env().unwrap();
    assert_eq!(config.logging.format, LogFormat::Json);

    env::remove_var("LOG_FORMAT");
}

#[test]
#[serial]
fn test_config_unparseable_numbers_fall_back_to_defaults() {
    env::set_var("API_TIMEOUT_MS", "not-a-number");

    let config = Config::from_env().unwrap();
    assert_eq!(config.request.api_timeout_ms, 5000);

    env::remove_var("API_TIMEOUT_MS");
}
