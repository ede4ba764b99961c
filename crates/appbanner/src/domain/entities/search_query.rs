//! SearchQuery - one catalog lookup

use serde::{Deserialize, Serialize};

pub const DEFAULT_ENTITY: &str = "software";
pub const DEFAULT_LIMIT: u32 = 25;

/// Catalog search parameters, already normalised
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub term: String,
    pub entity: String,
    pub limit: u32,
}

impl SearchQuery {
    /// Query for applications, as the banner page issues it
    pub fn software(term: impl Into<String>) -> Self {
        Self {
            term: term.into().trim().to_string(),
            entity: DEFAULT_ENTITY.to_string(),
            limit: DEFAULT_LIMIT,
        }
    }

    /// Build from raw request parameters.
    ///
    /// Returns `None` when there is nothing to search for (absent or blank term).
    pub fn from_params(term: Option<&str>, entity: Option<&str>, limit: Option<&str>) -> Option<Self> {
        let term = term.map(str::trim).filter(|t| !t.is_empty())?;

        let entity = entity
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .unwrap_or(DEFAULT_ENTITY);

        let limit = match limit.map(str::trim).filter(|l| !l.is_empty()) {
            None => DEFAULT_LIMIT,
            Some(raw) => match raw.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    tracing::warn!("⚠️  Invalid limit {:?}, using {}", raw, DEFAULT_LIMIT);
                    DEFAULT_LIMIT
                }
            },
        };

        Some(Self {
            term: term.to_string(),
            entity: entity.to_string(),
            limit,
        })
    }

    /// Query string pairs for the catalog API (country is added by the caller)
    pub fn pairs(&self) -> [(&'static str, String); 3] {
        [
            ("term", self.term.clone()),
            ("entity", self.entity.clone()),
            ("limit", self.limit.to_string()),
        ]
    }
}
