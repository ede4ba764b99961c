//! AppBanner Domain Library
//!
//! Core types and page logic for the Smart App Banner tester: search the App
//! Store catalog, pick an app, and make it the banner target of the page.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): catalog entities and query values
//!   - `entities/`: AppId, SearchQuery, SearchResult
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `services/`: catalog search, clipboard, navigation
//!   - `session`, `scheduler`: browser session storage and timers
//!
//! - **View** (`view/`): the banner tester page state machine and renderer
//!
//! - **Adapters** (`adapters/`): in-memory browser stand-ins and the
//!   `/api/search` HTTP client
//!
//! # Usage
//!
//! ```rust,ignore
//! use appbanner::adapters::{ManualScheduler, MemorySessionStore, RecordingNavigator};
//! use appbanner::{AppId, BannerTesterView, ViewConfig};
//!
//! let view = BannerTesterView::mount(
//!     AppId(333903271),
//!     MemorySessionStore::new(),
//!     ManualScheduler::new(),
//!     RecordingNavigator::new(),
//!     ViewConfig::default(),
//! );
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod view;

// Re-export commonly used types
pub use domain::{
    AppId, DomainError, SearchQuery, SearchResponse, SearchResult, DEFAULT_APP_ID,
    DEFAULT_ENTITY, DEFAULT_LIMIT, PLACEHOLDER_ICON,
};
pub use ports::{
    CatalogSearch, Clipboard, Navigator, Scheduler, SessionStore, TimerEvent, TimerHandle,
    REFRESH_COUNT_KEY, SHOW_WARNING_KEY, SHOW_WARNING_SENTINEL,
};
pub use view::{BannerTesterView, PageModel, PageRenderer, ViewConfig};
