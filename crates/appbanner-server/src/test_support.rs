//! Shared fixtures for route tests

use async_trait::async_trait;
use axum::{body::to_bytes, response::Response};
use serde_json::Value;
use std::sync::{Arc, Mutex};

use appbanner::{CatalogSearch, DomainError, PageRenderer, SearchQuery};

use crate::config::AppConfig;
use crate::AppState;

/// Catalog that answers every query the same way and remembers the queries
#[derive(Clone)]
pub struct StubCatalog {
    outcome: Result<Value, String>,
    queries: Arc<Mutex<Vec<SearchQuery>>>,
}

impl StubCatalog {
    pub fn returning(payload: Value) -> Self {
        Self {
            outcome: Ok(payload),
            queries: Arc::default(),
        }
    }

    pub fn failing() -> Self {
        Self {
            outcome: Err("error sending request".to_string()),
            queries: Arc::default(),
        }
    }

    pub fn queries(&self) -> Vec<SearchQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl CatalogSearch for StubCatalog {
    async fn search(&self, query: &SearchQuery) -> Result<Value, DomainError> {
        self.queries.lock().unwrap().push(query.clone());
        self.outcome.clone().map_err(DomainError::ExternalService)
    }
}

/// State around `catalog`; the returned clone shares its query log
pub fn state_with(catalog: StubCatalog) -> (AppState, StubCatalog) {
    let state = AppState {
        catalog: Arc::new(catalog.clone()),
        renderer: Arc::new(PageRenderer::new().unwrap()),
        config: Arc::new(AppConfig::default()),
    };
    (state, catalog)
}

pub async fn read_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn read_json(response: Response) -> Value {
    serde_json::from_str(&read_text(response).await).unwrap()
}
