//! Search Routes - App Store search proxy

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use appbanner::SearchQuery;

use crate::error::ApiError;
use crate::models::{CatalogPayload, SearchFailure, SearchParams};
use crate::AppState;

/// Forward a search to the App Store catalog and relay its payload
#[utoipa::path(
    get,
    path = "/api/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Catalog payload, unmodified", body = CatalogPayload),
        (status = 500, description = "Catalog unreachable or returned non-JSON", body = SearchFailure)
    ),
    tag = "Search"
)]
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Response, ApiError> {
    let Some(query) = SearchQuery::from_params(
        params.term.as_deref(),
        params.entity.as_deref(),
        params.limit.as_deref(),
    ) else {
        return Ok(Json(CatalogPayload::empty()).into_response());
    };

    let payload = state.catalog.search(&query).await.map_err(|e| {
        tracing::error!("❌ Catalog API error: {}", e);
        ApiError::UpstreamFailed
    })?;

    tracing::info!(
        "🔍 Search: {} (entity={}, limit={}) relayed",
        query.term,
        query.entity,
        query.limit
    );

    Ok(Json(payload).into_response())
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/search", get(search))
}
