//! Navigation Port
//!
//! Both operations replace the current page: everything held in memory by
//! the view is gone afterwards, only session storage and the URL survive.

/// Page navigation
pub trait Navigator {
    /// Reload the current location
    fn reload(&self);

    /// Navigate to a same-origin location such as `/?appId=1`
    fn navigate(&self, location: &str);
}
