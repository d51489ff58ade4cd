use std::env;

use crate::error::AppError;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub wikidata: WikidataConfig,
    pub request: RequestConfig,
    pub cache: CacheConfig,
    pub logging: LoggingConfig,
}

/// Wikidata endpoint configuration
#[derive(Debug, Clone)]
pub struct WikidataConfig {
    /// Keyed-action API endpoint (`w/api.php`).
    pub api_url: String,
    /// SPARQL query endpoint.
    pub sparql_url: String,
    /// Language code used for labels, descriptions, and sitelinks.
    pub language: String,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// HTTP request configuration.
///
/// The keyed API answers quickly, so it gets a short timeout to bound a
/// user-facing request. SPARQL queries are computationally heavier upstream
/// and get a longer one. No retries in either case: upstream rate limits
/// make blind retries counterproductive, so a failed call degrades to the
/// error/fallback path immediately.
#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub api_timeout_ms: u64,
    pub sparql_timeout_ms: u64,
}

/// Response cache configuration
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of cached responses before LRU eviction kicks in.
    pub capacity: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, AppError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let language = env::var("WIKIDATA_LANGUAGE").unwrap_or_else(|_| "en".to_string());

        let wikidata = WikidataConfig {
            api_url: env::var("WIKIDATA_API_URL")
                .unwrap_or_else(|_| "https://www.wikidata.org/w/api.php".to_string()),
            sparql_url: env::var("WIKIDATA_SPARQL_URL")
                .unwrap_or_else(|_| "https://query.wikidata.org/sparql".to_string()),
            language,
        };

        let request = RequestConfig {
            api_timeout_ms: env::var("API_TIMEOUT_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5000),
            sparql_timeout_ms: env::var("SPARQL_TIMEOUT_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10000),
        };

        let cache = CacheConfig {
            capacity: env::var("CACHE_CAPACITY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1000),
        };

        let logging = LoggingConfig {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .to_lowercase()
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        };

        if cache.capacity == 0 {
            return Err(AppError::Config {
                message: "CACHE_CAPACITY must be at least 1".to_string(),
            });
        }

        Ok(Config {
            wikidata,
            request,
            cache,
            logging,
        })
    }
}

impl Default for WikidataConfig {
    fn default() -> Self {
        Self {
            api_url: "https://www.wikidata.org/w/api.php".to_string(),
            sparql_url: "https://query.wikidata.org/sparql".to_string(),
            language: "en".to_string(),
        }
    }
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            api_timeout_ms: 5000,
            sparql_timeout_ms: 10000,
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { capacity: 1000 }
    }
}
