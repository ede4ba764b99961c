//! Page rendering
//!
//! The banner tester is a single HTML page. The server renders it for the
//! initial load; the view renders it again from its own state.
//!
//! Controls that only a running [`crate::BannerTesterView`] can act on (the
//! auto-reload toggle and copy buttons) are left out of a plain server
//! render: `refresh` is `None` and rows are not `copyable`.

use handlebars::Handlebars;
use serde::Serialize;

use crate::domain::{errors::DomainError, AppId, SearchResult};

pub const PAGE_TITLE: &str = "Smart App Banner Tester";
pub const PAGE_DESCRIPTION: &str = "Search and test Smart App Banners for iOS";

const PAGE_TEMPLATE_NAME: &str = "page";

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{{title}}</title>
<meta name="description" content="{{description}}">
<meta name="apple-itunes-app" content="{{{meta_content}}}">
</head>
<body>
{{#if warning}}
<div class="warning-overlay" role="alertdialog">
  <h2>Important!</h2>
  <p class="warning-lead">Please don't click the (X) on the banner!</p>
  <p>If you dismiss the banner, Safari will hide it and it may not show again for a while.</p>
  <div class="countdown">{{warning.seconds}}</div>
  <p>seconds remaining</p>
</div>
{{/if}}
<header>
  <h1>{{title}}</h1>
  {{#if refresh}}
  {{#if refresh.active}}
  <button type="button" class="refresh active" data-action="stop-refresh"><span class="spinner"></span>Refreshing ({{refresh.count}}/{{refresh.max}})... Click to stop</button>
  {{else}}
  <button type="button" class="refresh" data-action="start-refresh">If you can't see the app, click here!</button>
  {{/if}}
  {{/if}}
  <form method="get" action="/">
    <input type="hidden" name="appId" value="{{app_id}}">
    <input type="text" name="term" placeholder="Search App Store..." value="{{search_term}}">
    <button type="submit"{{#if is_loading}} disabled{{/if}}>{{#if is_loading}}<span class="spinner"></span>{{else}}Search{{/if}}</button>
  </form>
</header>
<div class="current-banner">Current Banner App ID: <span class="app-id">{{app_id}}</span></div>
<main>
  {{#if show_empty_state}}
  <div class="empty">Search for an app to get started</div>
  {{/if}}
  {{#if is_loading}}
  <div class="loading"><span class="spinner"></span></div>
  {{/if}}
  <ul class="results">
    {{#each results}}
    <li class="result" data-app-id="{{id}}">
      <img src="{{icon_url}}" alt="{{name}}" width="60" height="60">
      <div class="details">
        <h3>{{name}}</h3>
        <p>{{publisher}} • {{genre}}</p>
      </div>
      <div class="id">{{id}}</div>
      {{#if copyable}}
      <button type="button" class="copy" data-copy="{{id}}" title="Copy ID">{{#if copied}}Copied{{else}}Copy ID{{/if}}</button>
      {{/if}}
      {{#if disabled}}
      <span class="set{{#if active}} active{{/if}}" aria-disabled="true">{{#if setting}}<span class="spinner"></span>{{/if}}{{label}}</span>
      {{else}}
      <a class="set{{#if active}} active{{/if}}" href="{{{href}}}">{{label}}</a>
      {{/if}}
    </li>
    {{/each}}
  </ul>
</main>
</body>
</html>
"#;

/// One row of the results list
#[derive(Debug, Clone, Serialize)]
pub struct ResultRow {
    pub id: u64,
    pub name: String,
    pub publisher: String,
    pub genre: String,
    pub icon_url: String,
    /// A copy control is rendered for this row
    pub copyable: bool,
    /// The copy indicator is showing for this row
    pub copied: bool,
    /// This row is the current banner
    pub active: bool,
    /// Navigation to this row's banner is pending
    pub setting: bool,
    /// Set controls are locked while any selection is pending
    pub disabled: bool,
    pub label: &'static str,
    pub href: String,
}

impl ResultRow {
    pub fn new(result: &SearchResult, current: AppId) -> Self {
        let active = result.app_id() == current;
        Self {
            id: result.id,
            name: result.name.clone(),
            publisher: result.publisher.clone(),
            genre: result.genre.clone(),
            icon_url: result.icon_or_placeholder().to_string(),
            copyable: false,
            copied: false,
            active,
            setting: false,
            disabled: false,
            label: if active { "Active" } else { "Set" },
            href: result.app_id().banner_location(),
        }
    }
}

/// Auto-reload control state
#[derive(Debug, Clone, Default, Serialize)]
pub struct RefreshControl {
    pub active: bool,
    pub count: u32,
    pub max: u32,
}

/// Warning overlay state
#[derive(Debug, Clone, Serialize)]
pub struct WarningOverlay {
    pub seconds: u32,
}

/// Everything the page template needs
#[derive(Debug, Clone, Serialize)]
pub struct PageModel {
    #[serde(skip)]
    pub current: AppId,
    pub title: &'static str,
    pub description: &'static str,
    pub app_id: String,
    pub meta_content: String,
    pub search_term: String,
    pub is_loading: bool,
    pub show_empty_state: bool,
    pub results: Vec<ResultRow>,
    /// Auto-reload toggle; absent without a running view
    pub refresh: Option<RefreshControl>,
    pub warning: Option<WarningOverlay>,
    #[serde(skip)]
    pub max_refreshes: u32,
}

impl PageModel {
    /// Freshly loaded page for `app_id`
    pub fn new(app_id: AppId, max_refreshes: u32) -> Self {
        Self {
            current: app_id,
            title: PAGE_TITLE,
            description: PAGE_DESCRIPTION,
            app_id: app_id.to_string(),
            meta_content: app_id.meta_content(),
            search_term: String::new(),
            is_loading: false,
            show_empty_state: true,
            results: Vec::new(),
            refresh: None,
            max_refreshes,
            warning: None,
        }
    }

    /// Fill in a completed search
    pub fn with_search(mut self, term: &str, results: &[SearchResult]) -> Self {
        let current = self.current;
        self.search_term = term.to_string();
        self.results = results.iter().map(|r| ResultRow::new(r, current)).collect();
        self.show_empty_state = self.results.is_empty() && !self.is_loading;
        self
    }
}

/// Handlebars-backed page renderer
pub struct PageRenderer {
    registry: Handlebars<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, DomainError> {
        let mut registry = Handlebars::new();
        registry
            .register_template_string(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)
            .map_err(|e| DomainError::Render(e.to_string()))?;
        Ok(Self { registry })
    }

    pub fn render(&self, page: &PageModel) -> Result<String, DomainError> {
        self.registry
            .render(PAGE_TEMPLATE_NAME, page)
            .map_err(|e| DomainError::Render(e.to_string()))
    }
}
