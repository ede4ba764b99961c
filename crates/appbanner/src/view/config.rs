//! Page behaviour thresholds

use std::time::Duration;

use crate::domain::{DEFAULT_ENTITY, DEFAULT_LIMIT};

/// Timing and limits for the banner tester page
#[derive(Debug, Clone)]
pub struct ViewConfig {
    /// Reloads performed by the auto-reload helper before it stops
    pub max_refreshes: u32,
    /// Pause between two auto-reloads
    pub refresh_delay: Duration,
    /// Length of the warning overlay countdown, in seconds
    pub warning_seconds: u32,
    /// How long a copied id stays marked
    pub copied_window: Duration,
    /// Catalog entity searched by the page
    pub search_entity: String,
    /// Rows requested per search
    pub search_limit: u32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            max_refreshes: 10,
            refresh_delay: Duration::from_secs(3),
            warning_seconds: 10,
            copied_window: Duration::from_secs(2),
            search_entity: DEFAULT_ENTITY.to_string(),
            search_limit: DEFAULT_LIMIT,
        }
    }
}
