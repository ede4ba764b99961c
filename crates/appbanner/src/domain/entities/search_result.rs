//! SearchResult - one application row from the catalog

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::AppId;

/// Icon shown when the catalog entry has no artwork
pub const PLACEHOLDER_ICON: &str = "/placeholder.svg";

/// Catalog application as returned by the search API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "trackId")]
    pub id: u64,
    #[serde(rename = "trackName", default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(rename = "artistName", default, deserialize_with = "null_as_empty")]
    pub publisher: String,
    #[serde(rename = "primaryGenreName", default, deserialize_with = "null_as_empty")]
    pub genre: String,
    #[serde(rename = "artworkUrl100", default, deserialize_with = "null_as_empty")]
    pub icon_url: String,
}

// The catalog sends `null` for some text fields
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl SearchResult {
    pub fn app_id(&self) -> AppId {
        AppId(self.id)
    }

    pub fn icon_or_placeholder(&self) -> &str {
        if self.icon_url.is_empty() {
            PLACEHOLDER_ICON
        } else {
            &self.icon_url
        }
    }
}

/// Reader for catalog payloads (`{"resultCount": n, "results": [...]}`)
pub struct SearchResponse;

impl SearchResponse {
    /// Extract application rows from a raw payload.
    ///
    /// Anything that is not an array under `results` reads as no results;
    /// entries without a numeric `trackId` are dropped.
    pub fn from_payload(payload: &Value) -> Vec<SearchResult> {
        let Some(items) = payload.get("results").and_then(|r| r.as_array()) else {
            return Vec::new();
        };

        items
            .iter()
            .filter_map(|item| match SearchResult::deserialize(item) {
                Ok(result) => Some(result),
                Err(e) => {
                    tracing::debug!("Skipping catalog entry: {}", e);
                    None
                }
            })
            .collect()
    }

    /// Payload returned when there is nothing to search for
    pub fn empty() -> Value {
        serde_json::json!({ "results": [] })
    }
}
