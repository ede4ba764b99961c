//! Server configuration
//!
//! Read from Shuttle secrets at startup. Every key is optional; a key that
//! is present but malformed stops the server from starting.

use anyhow::{bail, Context, Result};
use std::time::Duration;

use appbanner::{AppId, DEFAULT_APP_ID};

pub const DEFAULT_CATALOG_URL: &str = "https://itunes.apple.com/search";
pub const DEFAULT_COUNTRY: &str = "US";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Catalog search endpoint the proxy forwards to
    pub catalog_url: String,
    /// Storefront country sent with every search
    pub country: String,
    /// Banner app when the page has no `appId`
    pub default_app_id: AppId,
    /// Upper bound for one upstream request
    pub upstream_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
            default_app_id: DEFAULT_APP_ID,
            upstream_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    /// Build from a key lookup (Shuttle `SecretStore::get` in production)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("CATALOG_SEARCH_URL") {
            reqwest::Url::parse(&url)
                .with_context(|| format!("Invalid CATALOG_SEARCH_URL: {url}"))?;
            config.catalog_url = url;
        }

        if let Some(country) = lookup("CATALOG_COUNTRY") {
            let country = country.trim().to_ascii_uppercase();
            if country.len() != 2 || !country.chars().all(|c| c.is_ascii_alphabetic()) {
                bail!("CATALOG_COUNTRY must be a two-letter country code, got {country:?}");
            }
            config.country = country;
        }

        if let Some(raw) = lookup("DEFAULT_APP_ID") {
            config.default_app_id = raw
                .parse()
                .with_context(|| format!("Invalid DEFAULT_APP_ID: {raw}"))?;
        }

        if let Some(raw) = lookup("UPSTREAM_TIMEOUT_SECS") {
            let secs: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid UPSTREAM_TIMEOUT_SECS: {raw}"))?;
            config.upstream_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}
