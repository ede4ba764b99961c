//! Domain Layer
//!
//! Catalog entities, query values and errors. No I/O lives here.

pub mod entities;
pub mod errors;

// Re-exports for convenience
pub use entities::*;
pub use errors::*;
