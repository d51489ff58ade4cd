use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, info};

use super::types::{ClaimsResponse, EntitiesResponse, SearchResponse, SparqlResponse};
use crate::cache::{cache_key, ResponseCache};
use crate::config::{RequestConfig, WikidataConfig};
use crate::error::{WikidataError, WikidataResult};

/// Client for the Wikidata keyed-action API and SPARQL endpoint.
///
/// Keyed-API responses are cached by (endpoint, sorted parameters); SPARQL
/// responses are never cached because every query embeds a randomized
/// ordering clause. All transport and shape failures surface as
/// [`WikidataError`] values, never as panics or raw reqwest errors.
#[derive(Clone)]
pub struct WikidataClient {
    api_client: Client,
    sparql_client: Client,
    api_url: String,
    sparql_url: String,
    language: String,
    cache: Arc<ResponseCache>,
    request_config: RequestConfig,
}

impl WikidataClient {
    /// Create a new client owning the given response cache.
    pub fn new(
        config: &WikidataConfig,
        request_config: RequestConfig,
        cache: ResponseCache,
    ) -> WikidataResult<Self> {
        let api_client = Client::builder()
            .timeout(Duration::from_millis(request_config.api_timeout_ms))
            .build()
            .map_err(WikidataError::Http)?;

        // SPARQL queries are heavier upstream and get their own timeout.
        let sparql_client = Client::builder()
            .timeout(Duration::from_millis(request_config.sparql_timeout_ms))
            .build()
            .map_err(WikidataError::Http)?;

        Ok(Self {
            api_client,
            sparql_client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            sparql_url: config.sparql_url.trim_end_matches('/').to_string(),
            language: config.language.clone(),
            cache: Arc::new(cache),
            request_config,
        })
    }

    /// Language code this client requests labels and sitelinks in.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Number of responses currently cached (for observability and tests).
    pub fn cached_responses(&self) -> usize {
        self.cache.len()
    }

    /// Fetch from the keyed-action API, going through the response cache.
    pub async fn fetch(&self, params: &[(&str, &str)]) -> WikidataResult<Value> {
        let key = cache_key(&self.api_url, params);

        if let Some(cached) = self.cache.get(&key) {
            return Ok(cached);
        }

        let start = Instant::now();
        let result = self
            .execute_get(&self.api_client, &self.api_url, params, self.request_config.api_timeout_ms)
            .await;
        let latency = start.elapsed();

        match result {
            Ok(body) => {
                // Wikidata reports some failures inside a 200 body.
                if let Some(api_error) = body.get("error") {
                    error!(error = %api_error, "API reported an error payload");
                    return Err(WikidataError::Api {
                        status: 200,
                        message: api_error.to_string(),
                    });
                }
                debug!(latency_ms = latency.as_millis(), "API request succeeded");
                self.cache.insert(key, body.clone());
                Ok(body)
            }
            Err(e) => {
                error!(error = %e, latency_ms = latency.as_millis(), "API request failed");
                Err(e)
            }
        }
    }

    /// Run a read-only SPARQL query. Not cached.
    pub async fn sparql(&self, query: &str) -> WikidataResult<Value> {
        debug!(query = %query, "Running SPARQL query");

        let start = Instant::now();
        let result = self
            .execute_get(
                &self.sparql_client,
                &self.sparql_url,
                &[("format", "json"), ("query", query)],
                self.request_config.sparql_timeout_ms,
            )
            .await;
        let latency = start.elapsed();

        match &result {
            Ok(_) => info!(latency_ms = latency.as_millis(), "SPARQL query succeeded"),
            Err(e) => error!(error = %e, latency_ms = latency.as_millis(), "SPARQL query failed"),
        }
        result
    }

    /// Free-text entity search (`wbsearchentities`).
    pub async fn search_entities(&self, text: &str, limit: usize) -> WikidataResult<SearchResponse> {
        let limit = limit.to_string();
        let params = [
            ("action", "wbsearchentities"),
            ("format", "json"),
            ("language", self.language.as_str()),
            ("search", text),
            ("type", "item"),
            ("limit", limit.as_str()),
        ];

        let body = self.fetch(&params).await?;
        Self::decode(body)
    }

    /// Full claim set for one entity (`wbgetclaims`).
    ///
    /// Deliberately unfiltered: the classifier needs both the instance-of
    /// values and the fictional indicator properties from a single call.
    pub async fn entity_claims(&self, entity_id: &str) -> WikidataResult<ClaimsResponse> {
        let params = [
            ("action", "wbgetclaims"),
            ("format", "json"),
            ("entity", entity_id),
        ];

        let body = self.fetch(&params).await?;
        Self::decode(body)
    }

    /// Batched entity lookup (`wbgetentities`) restricted to `props`.
    pub async fn entities(&self, ids: &[&str], props: &str) -> WikidataResult<EntitiesResponse> {
        let ids = ids.join("|");
        let params = [
            ("action", "wbgetentities"),
            ("format", "json"),
            ("ids", ids.as_str()),
            ("languages", self.language.as_str()),
            ("props", props),
        ];

        let body = self.fetch(&params).await?;
        Self::decode(body)
    }

    /// Run a SPARQL query and decode the binding rows.
    pub async fn sparql_bindings(&self, query: &str) -> WikidataResult<SparqlResponse> {
        let body = self.sparql(query).await?;
        Self::decode(body)
    }

    async fn execute_get(
        &self,
        client: &Client,
        url: &str,
        params: &[(&str, &str)],
        timeout_ms: u64,
    ) -> WikidataResult<Value> {
        let response = client.get(url).query(params).send().await.map_err(|e| {
            if e.is_timeout() {
                WikidataError::Timeout { timeout_ms }
            } else {
                WikidataError::Http(e)
            }
        })?;

        let status = response.status();

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(WikidataError::Api {
                status: status.as_u16(),
                message: error_body,
            });
        }

        response.json().await.map_err(|e| {
            if e.is_timeout() {
                WikidataError::Timeout { timeout_ms }
            } else {
                WikidataError::InvalidResponse {
                    message: format!("Failed to parse response: {}", e),
                }
            }
        })
    }

    fn decode<T: serde::de::DeserializeOwned>(body: Value) -> WikidataResult<T> {
        serde_json::from_value(body).map_err(|e| WikidataError::InvalidResponse {
            message: format!("Unexpected response shape: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let config = WikidataConfig::default();
        let request_config = RequestConfig::default();
        let cache = ResponseCache::new(16);

        let client = WikidataClient::new(&config, request_config, cache);
        assert!(client.is_ok());
        assert_eq!(client.unwrap().language(), "en");
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let config = WikidataConfig {
            api_url: "https://www.wikidata.org/w/api.php/".to_string(),
            ..WikidataConfig::default()
        };
        let client =
            WikidataClient::new(&config, RequestConfig::default(), ResponseCache::new(16)).unwrap();
        assert_eq!(client.api_url, "https://www.wikidata.org/w/api.php");
    }
}
