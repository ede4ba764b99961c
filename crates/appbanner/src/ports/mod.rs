//! Ports (Interfaces)
//!
//! Abstract interfaces between the banner page logic and the outside world:
//! the catalog, the browser session, timers, navigation and the clipboard.
//!
//! Implementations live in `adapters` (and in the server crate for the
//! upstream catalog client).

pub mod scheduler;
pub mod services;
pub mod session;

// Re-exports
pub use scheduler::*;
pub use services::*;
pub use session::*;
