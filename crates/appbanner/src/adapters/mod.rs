//! Adapters
//!
//! Port implementations that need no server: in-memory stand-ins for the
//! browser (session storage, timers, navigation, clipboard) and the HTTP
//! client the page uses to reach `/api/search`.

pub mod browser;
pub mod manual_scheduler;
pub mod memory_session;
pub mod proxy_client;

pub use browser::{MemoryClipboard, Navigation, RecordingNavigator};
pub use manual_scheduler::ManualScheduler;
pub use memory_session::MemorySessionStore;
pub use proxy_client::ProxySearchClient;
