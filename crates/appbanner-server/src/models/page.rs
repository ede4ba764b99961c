//! Page DTOs

use serde::Deserialize;

/// Query parameters of the banner tester page
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    /// Banner target; falls back to the configured default
    #[serde(rename = "appId")]
    pub app_id: Option<String>,
    /// Search to render server-side
    pub term: Option<String>,
}
