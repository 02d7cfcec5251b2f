use anyhow::Result;
use ratatui::widgets::TableState;
use throbber_widgets_tui::ThrobberState;

use super::config::UiConfig;
use crate::query::{FIRST_PAGE, SearchQuery};
use crate::records::{VariantPage, VariantRecord};
use crate::systems::fetch::{self, EndpointConfig, FetchError, HttpVariantSource, VariantSource};
use crate::tui::input::SearchInput;
pub use crate::tui::theme::Theme;

mod fetch_runtime;

use fetch_runtime::FetchRuntime;

impl<'a> Drop for App<'a> {
    fn drop(&mut self) {
        self.fetch.shutdown();
    }
}

/// Controller state for the variant browser.
///
/// The controller owns the submitted query, the latest applied results page,
/// and the fetch runtime that keeps both in step with the newest request.
/// Everything the renderer shows is derived from these fields; nothing else
/// caches result data.
pub struct App<'a> {
    pub(super) query: SearchQuery,
    pub(super) results: Option<VariantPage>,
    pub(super) last_error: Option<FetchError>,
    pub(super) page_size: u32,
    pub search_input: SearchInput<'a>,
    pub table_state: TableState,
    pub(crate) ui: UiConfig,
    pub theme: Theme,
    pub(crate) throbber_state: ThrobberState,
    pub(super) fetch: FetchRuntime,
}

impl<'a> App<'a> {
    /// Build an app talking HTTP to the configured endpoint.
    pub fn new(endpoint: &EndpointConfig) -> Result<Self> {
        let source = HttpVariantSource::new(endpoint)?;
        Ok(Self::with_source(endpoint, source))
    }

    /// Build an app over any source implementation, e.g. a stub in tests.
    pub fn with_source(endpoint: &EndpointConfig, source: impl VariantSource) -> Self {
        let mut table_state = TableState::default();
        table_state.select(Some(0));
        let (fetch_tx, fetch_rx, latest_request_id) = fetch::spawn(source);
        let fetch = FetchRuntime::new(fetch_tx, fetch_rx, latest_request_id);

        Self {
            query: SearchQuery::default(),
            results: None,
            last_error: None,
            page_size: endpoint.page_size.max(1),
            search_input: SearchInput::default(),
            table_state,
            ui: UiConfig::default(),
            theme: Theme::default(),
            throbber_state: ThrobberState::default(),
            fetch,
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Seed the query and the input draft before the first fetch is issued.
    pub fn set_initial_term(&mut self, term: &str) {
        self.search_input.set_text(term);
        self.query = SearchQuery::new(term);
    }

    /// Submit a search term, starting back at the first page.
    pub fn submit_search(&mut self, term: impl Into<String>) {
        self.apply_query(SearchQuery::new(term));
    }

    /// Move to a 1-based page, keeping the current term. Pages past the end
    /// are requested as-is; the service decides what an empty page looks
    /// like.
    pub fn go_to_page(&mut self, page: u32) {
        self.apply_query(self.query.with_page(page));
    }

    /// Advance one page when another page exists.
    pub fn next_page(&mut self) {
        let next = u64::from(self.query.page()) + 1;
        if next <= self.page_count() {
            self.go_to_page(self.query.page() + 1);
        }
    }

    /// Step back one page; the first page is the floor.
    pub fn previous_page(&mut self) {
        let page = self.query.page();
        if page > FIRST_PAGE {
            self.go_to_page(page - 1);
        }
    }

    /// Fetch the current query again even though it has not changed.
    pub fn refresh(&mut self) {
        self.last_error = None;
        self.request_fetch();
    }

    /// Single choke point for query changes: an unchanged query is not
    /// re-dispatched, everything else supersedes the in-flight fetch.
    fn apply_query(&mut self, next: SearchQuery) {
        if self.fetch.has_issued_fetch() && next == self.query {
            return;
        }
        self.query = next;
        self.last_error = None;
        self.request_fetch();
    }

    /// Rows of the latest applied page; empty before any result arrives.
    #[must_use]
    pub fn rows(&self) -> &[VariantRecord] {
        self.results
            .as_ref()
            .map(|page| page.results.as_slice())
            .unwrap_or_default()
    }

    /// Total matches across all pages, 0 before any result arrives.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.results.as_ref().map(|page| page.count).unwrap_or(0)
    }

    /// 0-based index of the current page, the form pagination widgets use.
    #[must_use]
    pub fn page_index(&self) -> u32 {
        self.query.page_index()
    }

    /// Number of pages the current total spans; 0 when nothing matches.
    #[must_use]
    pub fn page_count(&self) -> u64 {
        self.total_count().div_ceil(u64::from(self.page_size))
    }

    /// True while a fetch is outstanding and unapplied.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.fetch.is_in_flight()
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }

    #[must_use]
    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    #[must_use]
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Whether any page has ever been applied, empty or not.
    #[must_use]
    pub fn has_any_result(&self) -> bool {
        self.results.is_some()
    }

    /// The record under the cursor, if any.
    #[must_use]
    pub fn selected_record(&self) -> Option<&VariantRecord> {
        let selected = self.table_state.selected()?;
        self.rows().get(selected)
    }

    pub(crate) fn ensure_selection(&mut self) {
        let len = self.rows().len();
        if len == 0 {
            self.table_state.select(None);
        } else if self.table_state.selected().is_none() {
            self.table_state.select(Some(0));
        } else if let Some(selected) = self.table_state.selected()
            && selected >= len
        {
            self.table_state.select(Some(len - 1));
        }
    }
}
