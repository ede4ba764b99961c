//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{CatalogPayload, SearchFailure};
use crate::HealthCheck;

#[derive(OpenApi)]
#[openapi(
    paths(
        super::search::search,
        crate::health_check,
    ),
    components(
        schemas(
            CatalogPayload,
            SearchFailure,
            HealthCheck,
        )
    ),
    tags(
        (name = "Search", description = "App Store catalog search proxy"),
        (name = "Health", description = "Service status")
    ),
    info(
        title = "AppBanner API",
        version = "0.1.0",
        description = "Smart App Banner tester - App Store search proxy"
    )
)]
pub struct ApiDoc;
