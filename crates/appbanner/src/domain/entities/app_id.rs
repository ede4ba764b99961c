//! AppId - the App Store id a Smart App Banner points at

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::errors::DomainError;

/// Fallback banner target when the page has no usable `appId`
pub const DEFAULT_APP_ID: AppId = AppId(333903271);

/// Numeric App Store application id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppId(pub u64);

impl AppId {
    pub fn get(self) -> u64 {
        self.0
    }

    /// Resolve the `appId` query parameter, falling back on absent or malformed input
    pub fn from_param(param: Option<&str>, default: AppId) -> AppId {
        match param.map(str::trim).filter(|s| !s.is_empty()) {
            None => default,
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!("⚠️  Ignoring appId {:?}: {}", raw, e);
                default
            }),
        }
    }

    /// Page location that makes this id the active banner
    pub fn banner_location(self) -> String {
        format!("/?appId={}", self.0)
    }

    /// Content of the `apple-itunes-app` meta tag
    pub fn meta_content(self) -> String {
        format!("app-id={}", self.0)
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AppId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(AppId)
            .map_err(|_| DomainError::Validation(format!("not a numeric app id: {s}")))
    }
}

impl From<u64> for AppId {
    fn from(id: u64) -> Self {
        AppId(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_param_defaults() {
        assert_eq!(AppId::from_param(None, DEFAULT_APP_ID), DEFAULT_APP_ID);
        assert_eq!(AppId::from_param(Some(""), DEFAULT_APP_ID), DEFAULT_APP_ID);
        assert_eq!(AppId::from_param(Some("abc"), DEFAULT_APP_ID), DEFAULT_APP_ID);
        assert_eq!(
            AppId::from_param(Some("324684580"), DEFAULT_APP_ID),
            AppId(324684580)
        );
    }

    #[test]
    fn test_locations() {
        let id = AppId(324684580);
        assert_eq!(id.banner_location(), "/?appId=324684580");
        assert_eq!(id.meta_content(), "app-id=324684580");
        assert_eq!(id.to_string(), "324684580");
    }
}
