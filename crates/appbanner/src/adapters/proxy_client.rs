//! Proxy Search Client
//!
//! What the page calls: the same-origin `/api/search` endpoint, which relays
//! the catalog payload untouched.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::domain::{errors::DomainError, SearchQuery};
use crate::ports::CatalogSearch;

pub const SEARCH_PATH: &str = "/api/search";

#[derive(Clone)]
pub struct ProxySearchClient {
    client: Client,
    base_url: String,
}

impl ProxySearchClient {
    /// Creates a client for the server at `base_url` (e.g. `http://localhost:8000`)
    /// whose requests give up after `timeout`
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(DomainError::external)?;
        Ok(Self::with_client(client, base_url))
    }

    /// Uses `client` as configured, timeout included
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Full request URL for a query
    pub fn search_url(&self, query: &SearchQuery) -> String {
        format!(
            "{}{}?term={}&entity={}&limit={}",
            self.base_url,
            SEARCH_PATH,
            urlencoding::encode(&query.term),
            urlencoding::encode(&query.entity),
            query.limit
        )
    }
}

#[async_trait]
impl CatalogSearch for ProxySearchClient {
    async fn search(&self, query: &SearchQuery) -> Result<Value, DomainError> {
        let response = self
            .client
            .get(self.search_url(query))
            .send()
            .await
            .map_err(DomainError::external)?;

        if !response.status().is_success() {
            tracing::warn!("⚠️  Search proxy answered {}", response.status());
        }

        // The proxy reports failures as JSON too; only unreadable bodies are errors here
        response.json::<Value>().await.map_err(DomainError::external)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SearchResponse;
    use axum::{extract::Query, http::StatusCode, routing::get, Json, Router};
    use serde_json::json;
    use std::collections::HashMap;

    const TIMEOUT: Duration = Duration::from_secs(5);

    async fn spawn(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[test]
    fn test_search_url_encodes_term() {
        let client = ProxySearchClient::new("http://localhost:8000/", TIMEOUT).unwrap();
        let url = client.search_url(&SearchQuery::software("Angry Birds & co"));
        assert_eq!(
            url,
            "http://localhost:8000/api/search?term=Angry%20Birds%20%26%20co&entity=software&limit=25"
        );
    }

    #[tokio::test]
    async fn test_search_relays_payload() {
        let router = Router::new().route(
            SEARCH_PATH,
            get(|Query(params): Query<HashMap<String, String>>| async move {
                Json(json!({
                    "resultCount": 1,
                    "results": [{"trackId": 324684580, "trackName": params["term"]}]
                }))
            }),
        );
        let base = spawn(router).await;

        let payload = ProxySearchClient::new(base, TIMEOUT)
            .unwrap()
            .search(&SearchQuery::software("Spotify"))
            .await
            .unwrap();

        let results = SearchResponse::from_payload(&payload);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, 324684580);
        assert_eq!(results[0].name, "Spotify");
    }

    #[tokio::test]
    async fn test_server_error_body_is_still_read() {
        let router = Router::new().route(
            SEARCH_PATH,
            get(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"results": [], "error": "Failed to fetch"})),
                )
            }),
        );
        let base = spawn(router).await;

        let payload = ProxySearchClient::new(base, TIMEOUT)
            .unwrap()
            .search(&SearchQuery::software("Spotify"))
            .await
            .unwrap();

        assert_eq!(payload["error"], "Failed to fetch");
        assert!(SearchResponse::from_payload(&payload).is_empty());
    }

    #[tokio::test]
    async fn test_non_json_is_error() {
        let router = Router::new().route(SEARCH_PATH, get(|| async { "<html>oops</html>" }));
        let base = spawn(router).await;

        let result = ProxySearchClient::new(base, TIMEOUT)
            .unwrap()
            .search(&SearchQuery::software("Spotify"))
            .await;

        assert!(matches!(result, Err(DomainError::ExternalService(_))));
    }

    #[tokio::test]
    async fn test_configured_timeout_applies() {
        let router = Router::new().route(
            SEARCH_PATH,
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!({"results": []}))
            }),
        );
        let base = spawn(router).await;

        let result = ProxySearchClient::new(base, Duration::from_millis(200))
            .unwrap()
            .search(&SearchQuery::software("Spotify"))
            .await;

        assert!(matches!(result, Err(DomainError::ExternalService(_))));
    }
}
