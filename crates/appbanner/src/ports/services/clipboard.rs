//! Clipboard Port

use async_trait::async_trait;

use crate::domain::errors::DomainError;

/// System clipboard
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), DomainError>;
}
