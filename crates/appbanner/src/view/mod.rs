//! Banner Tester View
//!
//! Page state for the Smart App Banner tester: search, copy-to-clipboard,
//! banner selection, the one-time warning overlay and the auto-reload helper.
//!
//! All effects go through ports. A reload or navigation ends the page, so
//! the only state that carries over to the next [`BannerTesterView::mount`]
//! is what sits in the [`SessionStore`] and the `appId` the page was loaded
//! with.

pub mod config;
pub mod render;

use serde_json::Value;
use std::time::Duration;

use crate::domain::{errors::DomainError, AppId, SearchQuery, SearchResponse, SearchResult};
use crate::ports::{
    CatalogSearch, Clipboard, Navigator, Scheduler, SessionStore, TimerEvent, TimerHandle,
    REFRESH_COUNT_KEY, SHOW_WARNING_KEY, SHOW_WARNING_SENTINEL,
};

pub use config::ViewConfig;
pub use render::{PageModel, PageRenderer, RefreshControl, ResultRow, WarningOverlay};

const COUNTDOWN_TICK: Duration = Duration::from_secs(1);

#[derive(Debug)]
struct Countdown {
    remaining: u32,
    timer: Option<TimerHandle>,
}

/// The banner tester page
pub struct BannerTesterView<S: SessionStore, T: Scheduler, N: Navigator> {
    app_id: AppId,
    config: ViewConfig,
    session: S,
    scheduler: T,
    navigator: N,
    search_term: String,
    results: Vec<SearchResult>,
    is_loading: bool,
    copied: Option<(u64, TimerHandle)>,
    setting_app_id: Option<u64>,
    refresh_count: u32,
    is_auto_refreshing: bool,
    refresh_timer: Option<TimerHandle>,
    warning: Option<Countdown>,
}

impl<S: SessionStore, T: Scheduler, N: Navigator> BannerTesterView<S, T, N> {
    /// Load the page for `app_id`.
    ///
    /// Consumes a pending warning request and resumes an auto-reload loop
    /// left in the session by the previous page.
    pub fn mount(app_id: AppId, session: S, scheduler: T, navigator: N, config: ViewConfig) -> Self {
        let mut view = Self {
            app_id,
            config,
            session,
            scheduler,
            navigator,
            search_term: String::new(),
            results: Vec::new(),
            is_loading: false,
            copied: None,
            setting_app_id: None,
            refresh_count: 0,
            is_auto_refreshing: false,
            refresh_timer: None,
            warning: None,
        };

        view.consume_warning_request();
        view.resume_auto_refresh();
        view
    }

    pub fn app_id(&self) -> AppId {
        self.app_id
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn copied_id(&self) -> Option<u64> {
        self.copied.map(|(id, _)| id)
    }

    pub fn setting_app_id(&self) -> Option<u64> {
        self.setting_app_id
    }

    pub fn refresh_count(&self) -> u32 {
        self.refresh_count
    }

    pub fn is_auto_refreshing(&self) -> bool {
        self.is_auto_refreshing
    }

    /// Seconds left on the warning overlay, if it is showing
    pub fn warning_countdown(&self) -> Option<u32> {
        self.warning.as_ref().map(|w| w.remaining)
    }

    // ============================================
    // Search
    // ============================================

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Start a search if one may start now.
    ///
    /// Returns `None` for a blank term or while a search is already pending.
    pub fn begin_search(&mut self) -> Option<SearchQuery> {
        if self.is_loading {
            return None;
        }

        let term = self.search_term.trim();
        if term.is_empty() {
            return None;
        }

        let query = SearchQuery {
            term: term.to_string(),
            entity: self.config.search_entity.clone(),
            limit: self.config.search_limit,
        };
        self.is_loading = true;
        Some(query)
    }

    /// Apply the outcome of the search started by [`Self::begin_search`]
    pub fn finish_search(&mut self, outcome: Result<Value, DomainError>) {
        self.is_loading = false;
        match outcome {
            Ok(payload) => {
                self.results = SearchResponse::from_payload(&payload);
                tracing::info!("🔍 Search: {} -> {} apps", self.search_term.trim(), self.results.len());
            }
            Err(e) => {
                tracing::error!("Search error: {}", e);
                self.results.clear();
            }
        }
    }

    /// Search button
    pub async fn submit_search(&mut self, catalog: &dyn CatalogSearch) {
        let Some(query) = self.begin_search() else {
            return;
        };
        let outcome = catalog.search(&query).await;
        self.finish_search(outcome);
    }

    /// Key press in the search box; Enter submits
    pub async fn handle_key(&mut self, key: &str, catalog: &dyn CatalogSearch) {
        if key == "Enter" {
            self.submit_search(catalog).await;
        }
    }

    // ============================================
    // Copy / Set
    // ============================================

    /// Copy an app id to the clipboard and mark it as copied for a while
    pub async fn copy_id(&mut self, id: u64, clipboard: &dyn Clipboard) {
        if let Err(e) = clipboard.write_text(&id.to_string()).await {
            tracing::error!("Copy error: {}", e);
            return;
        }

        if let Some((_, previous)) = self.copied.take() {
            self.scheduler.cancel(previous);
        }
        let timer = self
            .scheduler
            .schedule(self.config.copied_window, TimerEvent::ClearCopied(id));
        self.copied = Some((id, timer));
    }

    /// Make `id` the banner app: flag the warning for the next page and
    /// navigate there.
    ///
    /// Returns `false` when a selection is already on its way.
    pub fn set_as_banner(&mut self, id: u64) -> bool {
        if self.setting_app_id.is_some() {
            return false;
        }

        self.setting_app_id = Some(id);
        self.session.set(SHOW_WARNING_KEY, SHOW_WARNING_SENTINEL);
        tracing::info!("📱 Setting banner app {}", id);
        self.leave(|navigator| navigator.navigate(&AppId(id).banner_location()));
        true
    }

    // ============================================
    // Auto-reload helper
    // ============================================

    pub fn start_auto_refresh(&mut self) {
        self.session.set(REFRESH_COUNT_KEY, "1");
        self.is_auto_refreshing = true;
        self.refresh_count = 1;
        tracing::info!("🔄 Auto-reload started");
        self.leave(|navigator| navigator.reload());
    }

    pub fn stop_auto_refresh(&mut self) {
        if let Some(timer) = self.refresh_timer.take() {
            self.scheduler.cancel(timer);
        }
        self.session.remove(REFRESH_COUNT_KEY);
        self.is_auto_refreshing = false;
        self.refresh_count = 0;
        tracing::info!("⏹️  Auto-reload stopped");
    }

    /// Toggle used by the header control
    pub fn toggle_auto_refresh(&mut self) {
        if self.is_auto_refreshing {
            self.stop_auto_refresh();
        } else {
            self.start_auto_refresh();
        }
    }

    fn resume_auto_refresh(&mut self) {
        let Some(stored) = self.session.get(REFRESH_COUNT_KEY) else {
            return;
        };

        match stored.trim().parse::<u32>() {
            Ok(count) if count < self.config.max_refreshes => {
                self.refresh_count = count;
                self.is_auto_refreshing = true;
                self.refresh_timer = Some(
                    self.scheduler
                        .schedule(self.config.refresh_delay, TimerEvent::AutoReload),
                );
                tracing::info!("🔄 Auto-reload {}/{}", count, self.config.max_refreshes);
            }
            Ok(count) => {
                self.refresh_count = count;
                self.is_auto_refreshing = false;
                self.session.remove(REFRESH_COUNT_KEY);
                tracing::info!("✅ Auto-reload finished after {} reloads", count);
            }
            Err(_) => {
                tracing::warn!("⚠️  Discarding unreadable {} {:?}", REFRESH_COUNT_KEY, stored);
                self.session.remove(REFRESH_COUNT_KEY);
            }
        }
    }

    // ============================================
    // Warning overlay
    // ============================================

    fn consume_warning_request(&mut self) {
        let Some(flag) = self.session.get(SHOW_WARNING_KEY) else {
            return;
        };
        self.session.remove(SHOW_WARNING_KEY);

        if flag != SHOW_WARNING_SENTINEL || self.config.warning_seconds == 0 {
            return;
        }

        let timer = self.scheduler.schedule(COUNTDOWN_TICK, TimerEvent::CountdownTick);
        self.warning = Some(Countdown {
            remaining: self.config.warning_seconds,
            timer: Some(timer),
        });
    }

    // ============================================
    // Timers
    // ============================================

    /// Deliver a fired timer
    pub fn on_timer(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::CountdownTick => self.tick_countdown(),
            TimerEvent::AutoReload => self.auto_reload(),
            TimerEvent::ClearCopied(id) => {
                if self.copied_id() == Some(id) {
                    self.copied = None;
                }
            }
        }
    }

    fn tick_countdown(&mut self) {
        let Some(warning) = self.warning.as_mut() else {
            return;
        };

        warning.remaining = warning.remaining.saturating_sub(1);
        if warning.remaining == 0 {
            self.warning = None;
            return;
        }
        warning.timer = Some(self.scheduler.schedule(COUNTDOWN_TICK, TimerEvent::CountdownTick));
    }

    fn auto_reload(&mut self) {
        self.refresh_timer = None;

        // Stopped in the meantime
        if self.session.get(REFRESH_COUNT_KEY).is_none() {
            return;
        }

        let next = self.refresh_count + 1;
        self.session.set(REFRESH_COUNT_KEY, &next.to_string());
        self.leave(|navigator| navigator.reload());
    }

    /// Hand the page over to the navigator; nothing scheduled here survives it
    fn leave(&mut self, go: impl FnOnce(&N)) {
        self.cancel_timers();
        go(&self.navigator);
    }

    fn cancel_timers(&mut self) {
        if let Some(timer) = self.refresh_timer.take() {
            self.scheduler.cancel(timer);
        }
        if let Some(timer) = self.warning.as_mut().and_then(|w| w.timer.take()) {
            self.scheduler.cancel(timer);
        }
        if let Some((_, timer)) = self.copied {
            self.scheduler.cancel(timer);
        }
    }

    /// Tear the page down
    pub fn unmount(mut self) {
        self.cancel_timers();
    }

    // ============================================
    // Rendering
    // ============================================

    pub fn page_model(&self) -> PageModel {
        let mut page = PageModel::new(self.app_id, self.config.max_refreshes);
        page.is_loading = self.is_loading;
        let mut page = page.with_search(&self.search_term, &self.results);

        let copied = self.copied_id();
        for row in &mut page.results {
            row.copyable = true;
            row.copied = copied == Some(row.id);
            row.setting = self.setting_app_id == Some(row.id);
            row.disabled = self.setting_app_id.is_some();
        }

        page.refresh = Some(RefreshControl {
            active: self.is_auto_refreshing,
            count: self.refresh_count,
            max: page.max_refreshes,
        });
        page.warning = self.warning.as_ref().map(|w| WarningOverlay {
            seconds: w.remaining,
        });
        page
    }

    pub fn render(&self, renderer: &PageRenderer) -> Result<String, DomainError> {
        renderer.render(&self.page_model())
    }
}

impl<S: SessionStore, T: Scheduler, N: Navigator> Drop for BannerTesterView<S, T, N> {
    fn drop(&mut self) {
        self.cancel_timers();
    }
}
