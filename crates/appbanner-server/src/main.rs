use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use appbanner::{CatalogSearch, PageRenderer};

mod adapters;
mod config;
mod error;
mod models;
mod routes;

#[cfg(test)]
mod test_support;

use adapters::ItunesCatalog;
use config::AppConfig;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogSearch>,
    pub renderer: Arc<PageRenderer>,
    pub config: Arc<AppConfig>,
}

#[derive(Serialize, ToSchema)]
pub struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

/// Service status
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthCheck)),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "AppBanner is running - pick an app, watch the banner".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn build_router(state: AppState) -> Router {
    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::page::router())
        .merge(routes::search::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("📱 AppBanner initializing...");

    let config = AppConfig::from_lookup(|key| secrets.get(key))?;
    tracing::info!(
        "🌍 Catalog: {} (country {}), default banner app {}",
        config.catalog_url,
        config.country,
        config.default_app_id
    );

    let catalog = ItunesCatalog::new(&config)?;
    tracing::info!("🔍 Search proxy initialized");

    let renderer = PageRenderer::new().context("Failed to load page templates")?;

    let state = AppState {
        catalog: Arc::new(catalog),
        renderer: Arc::new(renderer),
        config: Arc::new(config),
    };

    let router = build_router(state);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ AppBanner ready");

    Ok(router.into())
}
