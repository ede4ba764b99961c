//! Catalog Search Port
//!
//! Abstract interface for App Store catalog lookups.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{errors::DomainError, SearchQuery};

/// Service interface for catalog search.
///
/// Implementations return the catalog payload as-is; callers that need rows
/// read it with [`crate::SearchResponse::from_payload`].
#[async_trait]
pub trait CatalogSearch: Send + Sync {
    /// Run one search
    async fn search(&self, query: &SearchQuery) -> Result<Value, DomainError>;
}
