//! Page Routes - the banner tester page
//!
//! Renders the page for the requested banner app. A `term` is searched here
//! as well, so search and Set work as plain form and link navigation. The
//! copy buttons and the auto-reload toggle need a running view and are not
//! part of this render.

use axum::{
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};

use appbanner::{AppId, PageModel, SearchQuery, SearchResponse, ViewConfig};

use crate::error::ApiError;
use crate::models::PageParams;
use crate::AppState;

const PLACEHOLDER_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="60" height="60" viewBox="0 0 60 60"><rect width="60" height="60" rx="13" fill="#e5e7eb"/></svg>"##;

pub async fn page(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Html<String>, ApiError> {
    let app_id = AppId::from_param(params.app_id.as_deref(), state.config.default_app_id);
    let term = params.term.unwrap_or_default();

    let results = match SearchQuery::from_params(Some(&term), None, None) {
        None => Vec::new(),
        Some(query) => match state.catalog.search(&query).await {
            Ok(payload) => SearchResponse::from_payload(&payload),
            Err(e) => {
                tracing::error!("❌ Catalog API error: {}", e);
                Vec::new()
            }
        },
    };

    let page = PageModel::new(app_id, ViewConfig::default().max_refreshes).with_search(&term, &results);
    let html = state.renderer.render(&page)?;

    Ok(Html(html))
}

async fn placeholder() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "image/svg+xml")], PLACEHOLDER_SVG)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(page))
        .route("/placeholder.svg", get(placeholder))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{read_text, state_with, StubCatalog};
    use axum::{body::Body, http::Request, http::StatusCode};
    use serde_json::json;
    use tower::ServiceExt;

    async fn get_page(catalog: StubCatalog, uri: &str) -> (StatusCode, String, StubCatalog) {
        let (state, catalog) = state_with(catalog);
        let response = router()
            .with_state(state)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        (status, read_text(response).await, catalog)
    }

    #[tokio::test]
    async fn test_default_app_id() {
        let (status, html, catalog) =
            get_page(StubCatalog::returning(json!({"results": []})), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains(r#"<meta name="apple-itunes-app" content="app-id=333903271">"#));
        assert!(html.contains("Search for an app to get started"));
        assert!(catalog.queries().is_empty());
    }

    #[tokio::test]
    async fn test_app_id_param() {
        let (_, html, _) =
            get_page(StubCatalog::returning(json!({"results": []})), "/?appId=324684580").await;
        assert!(html.contains(r#"content="app-id=324684580""#));

        let (_, html, _) =
            get_page(StubCatalog::returning(json!({"results": []})), "/?appId=not-a-number").await;
        assert!(html.contains(r#"content="app-id=333903271""#));
    }

    #[tokio::test]
    async fn test_server_side_search() {
        let payload = json!({"results": [
            {"trackId": 324684580, "trackName": "Spotify", "artistName": "Spotify AB", "primaryGenreName": "Music"}
        ]});
        let (_, html, catalog) =
            get_page(StubCatalog::returning(payload), "/?appId=324684580&term=Spotify").await;

        assert_eq!(catalog.queries(), vec![SearchQuery::software("Spotify")]);
        assert_eq!(html.matches(r#"<li class="result""#).count(), 1);
        assert!(html.contains(">Active</a>"));
    }

    #[tokio::test]
    async fn test_served_page_has_only_working_controls() {
        let payload = json!({"results": [{"trackId": 324684580, "trackName": "Spotify"}]});
        let (_, html, _) = get_page(StubCatalog::returning(payload), "/?term=Spotify").await;

        assert!(!html.contains("data-action"));
        assert!(!html.contains("data-copy"));
        assert!(html.contains(r#"<form method="get" action="/">"#));
        assert!(html.contains(r#"href="/?appId=324684580">Set</a>"#));
    }

    #[tokio::test]
    async fn test_search_failure_renders_empty() {
        let (status, html, _) = get_page(StubCatalog::failing(), "/?term=Spotify").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(html.matches(r#"<li class="result""#).count(), 0);
        assert!(html.contains("Search for an app to get started"));
    }

    #[tokio::test]
    async fn test_placeholder_icon() {
        let (status, body, _) =
            get_page(StubCatalog::returning(json!({})), "/placeholder.svg").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with("<svg"));
    }
}
