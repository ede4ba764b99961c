//! Search proxy DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Query parameters of `GET /api/search`
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Free-text search; blank means no search
    pub term: Option<String>,
    /// Catalog entity (default `software`)
    pub entity: Option<String>,
    /// Maximum number of results (default `25`)
    pub limit: Option<String>,
}

/// Catalog payload as relayed from the search API
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_count: Option<i64>,
    #[schema(value_type = Vec<Object>)]
    pub results: Vec<serde_json::Value>,
}

/// Body returned when the catalog could not be reached
#[derive(Debug, Serialize, ToSchema)]
pub struct SearchFailure {
    #[schema(value_type = Vec<Object>)]
    pub results: Vec<serde_json::Value>,
    #[schema(example = "Failed to fetch")]
    pub error: String,
}

impl CatalogPayload {
    /// Answer for a request with nothing to search for
    pub fn empty() -> Self {
        Self {
            result_count: None,
            results: Vec::new(),
        }
    }
}

impl SearchFailure {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            results: Vec::new(),
            error: error.into(),
        }
    }
}
