//! Search controller: keystrokes → debounced term → filter → page.
//!
//! Holds the only mutable search state (raw input, committed term,
//! current page) and derives a fresh [`PageView`] on every call to
//! [`SearchController::view`]. Nothing derived is cached between renders.
//!
//! # Transitions
//!
//! - `on_input_change` - raw input changes at once; the debouncer is fired
//!   with the new text
//! - `tick` - a due debounce commits its value; a commit that changes the
//!   term resets the page to 1 in the same turn
//! - `on_page_change` - stores the requested page (clamped on use)
//!
//! Time is passed in by the caller, so the controller never sleeps and
//! tests drive it with synthetic instants.

use crate::model::{CatalogSnapshot, Item};
use crate::state::debounce::Debouncer;
use crate::state::filter::filter_items;
use crate::state::pagination::{
    paginate, page_controls, visible_page_window, PageControl, PageSize,
    DEFAULT_MAX_VISIBLE_PAGES,
};
use std::time::{Duration, Instant};
use tracing::debug;

/// Quiet period before typed text becomes the committed term.
pub const DEFAULT_DEBOUNCE_DELAY: Duration = Duration::from_millis(500);

// ===== Settings =====

/// Tunables for a [`SearchController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerSettings {
    /// Items per page.
    pub page_size: PageSize,
    /// Quiet period after the last keystroke.
    pub debounce_delay: Duration,
    /// Width of the visible page-number window.
    pub max_visible_pages: usize,
    /// Whether the pagination bar shows page numbers or only Prev/Next.
    pub show_page_numbers: bool,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            page_size: PageSize::default(),
            debounce_delay: DEFAULT_DEBOUNCE_DELAY,
            max_visible_pages: DEFAULT_MAX_VISIBLE_PAGES,
            show_page_numbers: true,
        }
    }
}

// ===== SearchMode =====

/// Whether a non-empty term is currently filtering the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Committed term is empty; every item is shown.
    Idle,
    /// Committed term is non-empty.
    Filtering,
}

// ===== Derived views =====

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a> {
    /// Text in the search bar (may be ahead of `committed_term`).
    pub raw_input: &'a str,
    /// Term the list is filtered by.
    pub committed_term: &'a str,
    /// Items on the current page.
    pub page_slice: Vec<&'a Item>,
    /// Number of items matching the committed term.
    pub match_count: usize,
    /// Total number of pages (0 when nothing matches).
    pub total_pages: usize,
    /// Current page after clamping.
    pub clamped_page: usize,
    /// Page numbers for the page-number buttons.
    pub visible_page_numbers: Vec<usize>,
    /// Full pagination bar layout.
    pub page_controls: Vec<PageControl>,
}

impl PageView<'_> {
    /// Whether the "no results" affordance should be shown.
    pub fn is_empty(&self) -> bool {
        self.match_count == 0
    }
}

/// Result of [`SearchController::view`].
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogView<'a> {
    /// The source is still loading; the pipeline is not rendered.
    Loading {
        /// Text in the search bar, still echoed while loading.
        raw_input: &'a str,
    },
    /// The pipeline's output for this frame.
    Ready(PageView<'a>),
}

// ===== SearchController =====

/// Owner of the search state.
#[derive(Debug, Clone)]
pub struct SearchController {
    raw_input: String,
    committed_term: String,
    current_page: usize,
    settings: ControllerSettings,
    debouncer: Debouncer<String>,
}

impl SearchController {
    /// Create an idle controller on page 1.
    pub fn new(settings: ControllerSettings) -> Self {
        Self {
            raw_input: String::new(),
            committed_term: String::new(),
            current_page: 1,
            debouncer: Debouncer::new(settings.debounce_delay),
            settings,
        }
    }

    /// Create a controller whose term is already committed (no debounce).
    pub fn with_initial_term(settings: ControllerSettings, term: impl Into<String>) -> Self {
        let term = term.into();
        let mut controller = Self::new(settings);
        controller.raw_input = term.clone();
        controller.committed_term = term;
        controller
    }

    /// Text in the search bar.
    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    /// Term the list is filtered by.
    pub fn committed_term(&self) -> &str {
        &self.committed_term
    }

    /// Requested page (1-based, clamped only when used).
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Settings this controller was built with.
    pub fn settings(&self) -> &ControllerSettings {
        &self.settings
    }

    /// Idle or filtering, by committed term.
    pub fn mode(&self) -> SearchMode {
        if self.committed_term.is_empty() {
            SearchMode::Idle
        } else {
            SearchMode::Filtering
        }
    }

    /// Whether typed text is waiting to be committed.
    pub fn is_debouncing(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// When the pending commit comes due, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// The search bar text changed.
    ///
    /// Echoes immediately; the filter only follows after the quiet period.
    pub fn on_input_change(&mut self, text: impl Into<String>, now: Instant) {
        let text = text.into();
        self.raw_input.clone_from(&text);
        self.debouncer.fire(text, now);
    }

    /// Commit a due debounced term.
    ///
    /// Returns `true` if the committed term changed (and the page reset).
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.debouncer.poll(now) {
            Some(term) => self.commit(term),
            None => false,
        }
    }

    /// A page button was pressed.
    ///
    /// Returns `false` (and does nothing) if `page` is already current.
    pub fn on_page_change(&mut self, page: usize) -> bool {
        let page = page.max(1);
        if page == self.current_page {
            return false;
        }
        debug!(from = self.current_page, to = page, "page change");
        self.current_page = page;
        true
    }

    /// Drop any pending commit. Called when the view goes away.
    pub fn teardown(&mut self) {
        if self.debouncer.cancel().is_some() {
            debug!("search controller torn down with a pending commit");
        }
    }

    /// Clamped current page and total pages for `items`.
    pub fn page_bounds(&self, items: &[Item]) -> (usize, usize) {
        let filtered = filter_items(items, &self.committed_term);
        let page = paginate(&filtered, self.settings.page_size, self.current_page);
        (page.page, page.total_pages)
    }

    /// Derive this frame's view from the source snapshot.
    pub fn view<'a>(&'a self, snapshot: &'a CatalogSnapshot) -> CatalogView<'a> {
        if snapshot.loading {
            CatalogView::Loading {
                raw_input: &self.raw_input,
            }
        } else {
            CatalogView::Ready(self.page_view(&snapshot.items))
        }
    }

    /// Run filter and pagination over `items`.
    pub fn page_view<'a>(&'a self, items: &'a [Item]) -> PageView<'a> {
        let filtered = filter_items(items, &self.committed_term);
        let page = paginate(&filtered, self.settings.page_size, self.current_page);
        let visible_page_numbers =
            visible_page_window(page.total_pages, page.page, self.settings.max_visible_pages);
        let controls = page_controls(
            page.total_pages,
            page.page,
            self.settings.max_visible_pages,
            self.settings.show_page_numbers,
        );

        PageView {
            raw_input: &self.raw_input,
            committed_term: &self.committed_term,
            page_slice: page.items.to_vec(),
            match_count: filtered.len(),
            total_pages: page.total_pages,
            clamped_page: page.page,
            visible_page_numbers,
            page_controls: controls,
        }
    }

    fn commit(&mut self, term: String) -> bool {
        if term == self.committed_term {
            return false;
        }
        debug!(term = %term, "search term committed");
        self.committed_term = term;
        self.current_page = 1;
        true
    }
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new(ControllerSettings::default())
    }
}

#[cfg(test)]
#[path = "search_controller_tests.rs"]
mod tests;
