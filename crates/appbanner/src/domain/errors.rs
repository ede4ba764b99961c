//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Render error: {0}")]
    Render(String),
}

impl DomainError {
    pub fn external<E: std::fmt::Display>(err: E) -> Self {
        Self::ExternalService(err.to_string())
    }
}
