//! API errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use appbanner::DomainError;

use crate::models::SearchFailure;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Catalog request failed; the cause is logged where it happened
    #[error("Failed to fetch")]
    UpstreamFailed,

    #[error("Page error: {0}")]
    Page(#[from] DomainError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::UpstreamFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SearchFailure::new(self.to_string())),
            )
                .into_response(),
            ApiError::Page(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
            }
        }
    }
}
