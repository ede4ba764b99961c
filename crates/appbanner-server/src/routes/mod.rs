//! AppBanner Routes
//!
//! - / - Banner tester page (`appId`, optional server-side `term`)
//! - /placeholder.svg - Icon for apps without artwork
//! - /api/search - App Store search proxy

pub mod page;
pub mod search;
pub mod swagger;
