//! Infrastructure adapters
//!
//! Implementations of the port traits defined in the `appbanner` crate.

pub mod itunes;

pub use itunes::ItunesCatalog;
