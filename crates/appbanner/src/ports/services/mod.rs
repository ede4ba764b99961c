//! Service Ports
//!
//! Interfaces for external effects.

pub mod catalog_search;
pub mod clipboard;
pub mod navigator;

pub use catalog_search::*;
pub use clipboard::*;
pub use navigator::*;
