//! Session Storage Port
//!
//! Per-tab key/value storage that survives reloads but not the session.

/// Auto-reload iteration counter (string-encoded integer)
pub const REFRESH_COUNT_KEY: &str = "refreshCount";

/// One-shot request to show the banner warning overlay
pub const SHOW_WARNING_KEY: &str = "showBannerWarning";

/// Value stored under [`SHOW_WARNING_KEY`]
pub const SHOW_WARNING_SENTINEL: &str = "true";

/// Browser session storage
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str);

    fn remove(&self, key: &str);
}
