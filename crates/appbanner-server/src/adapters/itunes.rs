//! iTunes Search API client
//!
//! Upstream side of the search proxy: one GET per query, country pinned by
//! configuration, body returned as parsed JSON.

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use appbanner::{CatalogSearch, DomainError, SearchQuery};

use crate::config::AppConfig;

pub struct ItunesCatalog {
    client: Client,
    url: String,
    country: String,
}

impl ItunesCatalog {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.upstream_timeout)
            .user_agent(concat!("appbanner/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            url: config.catalog_url.clone(),
            country: config.country.clone(),
        })
    }
}

#[async_trait]
impl CatalogSearch for ItunesCatalog {
    async fn search(&self, query: &SearchQuery) -> Result<Value, DomainError> {
        let response = self
            .client
            .get(&self.url)
            .query(&query.pairs())
            .query(&[("country", self.country.as_str())])
            .send()
            .await
            .map_err(DomainError::external)?;

        // Error statuses with a JSON body are relayed like any other payload
        response.json::<Value>().await.map_err(DomainError::external)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::RawQuery, routing::get, Json, Router};
    use serde_json::json;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    async fn spawn(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/search", addr)
    }

    fn catalog_for(url: String) -> ItunesCatalog {
        let config = AppConfig {
            catalog_url: url,
            upstream_timeout: Duration::from_secs(5),
            ..AppConfig::default()
        };
        ItunesCatalog::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_query_string_and_relay() {
        let seen = Arc::new(Mutex::new(None));
        let recorder = seen.clone();
        let router = Router::new().route(
            "/search",
            get(move |RawQuery(query): RawQuery| {
                let recorder = recorder.clone();
                async move {
                    *recorder.lock().unwrap() = query;
                    Json(json!({"resultCount": 1, "results": [{"trackId": 324684580}]}))
                }
            }),
        );
        let catalog = catalog_for(spawn(router).await);

        let payload = catalog.search(&SearchQuery::software("Spotify")).await.unwrap();

        assert_eq!(
            seen.lock().unwrap().as_deref(),
            Some("term=Spotify&entity=software&limit=25&country=US")
        );
        assert_eq!(payload["results"][0]["trackId"], 324684580);
        assert_eq!(payload["resultCount"], 1);
    }

    #[tokio::test]
    async fn test_non_json_body_is_error() {
        let router = Router::new().route("/search", get(|| async { "Service Unavailable" }));
        let catalog = catalog_for(spawn(router).await);

        let result = catalog.search(&SearchQuery::software("Spotify")).await;
        assert!(matches!(result, Err(DomainError::ExternalService(_))));
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_error() {
        // Bind then drop to get a port nobody listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let catalog = catalog_for(format!("http://{}/search", addr));
        let result = catalog.search(&SearchQuery::software("Spotify")).await;
        assert!(result.is_err());
    }
}
