//! Application state (pure).
//!
//! Wraps the [`SearchController`] with the browser's own UI state: which
//! pane has focus, the selected row on the current page, the detail popup
//! and the help overlay. Every transition takes the current items and the
//! current time as arguments, so the whole thing is testable without a
//! terminal.

use crate::model::{Item, ItemId, KeyAction};
use crate::state::search_controller::{ControllerSettings, PageView, SearchController};
use std::time::Instant;
use tracing::debug;

// ===== FocusPane =====

/// Which pane receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPane {
    /// Search bar: printable keys edit the search text.
    #[default]
    Search,
    /// Item list: keys go through `KeyBindings`.
    Grid,
}

// ===== AppState =====

/// Complete UI state of the browser.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Search, filter and pagination state.
    pub search: SearchController,
    /// Pane with keyboard focus.
    pub focus: FocusPane,
    /// Whether the help overlay is shown.
    pub help_visible: bool,
    selected: usize,
    detail: Option<ItemId>,
    load_error: Option<String>,
}

impl AppState {
    /// Fresh state with focus in the search bar.
    pub fn new(settings: ControllerSettings) -> Self {
        Self::from_controller(SearchController::new(settings))
    }

    /// Fresh state with `term` already committed.
    pub fn with_initial_term(settings: ControllerSettings, term: impl Into<String>) -> Self {
        Self::from_controller(SearchController::with_initial_term(settings, term))
    }

    fn from_controller(search: SearchController) -> Self {
        Self {
            search,
            focus: FocusPane::default(),
            help_visible: false,
            selected: 0,
            detail: None,
            load_error: None,
        }
    }

    /// Selected row on the current page (unclamped).
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Item shown in the detail popup, if open.
    pub fn detail_target(&self) -> Option<&ItemId> {
        self.detail.as_ref()
    }

    /// Whether the detail popup is open.
    pub fn is_detail_open(&self) -> bool {
        self.detail.is_some()
    }

    /// Message from a failed catalog load.
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Record a failed catalog load for the status line.
    pub fn set_load_error(&mut self, message: impl Into<String>) {
        self.load_error = Some(message.into());
    }

    /// Selected row clamped to the page slice.
    pub fn clamped_selection(&self, view: &PageView<'_>) -> Option<usize> {
        if view.page_slice.is_empty() {
            None
        } else {
            Some(self.selected.min(view.page_slice.len() - 1))
        }
    }

    /// Item under the selection on the given page.
    pub fn selected_item<'a>(&self, view: &PageView<'a>) -> Option<&'a Item> {
        self.clamped_selection(view)
            .and_then(|idx| view.page_slice.get(idx).copied())
    }

    // ===== Search bar =====

    /// Apply an edit to the search text.
    ///
    /// Returns `true` if the text changed (and the debounce restarted).
    pub fn edit_search<F>(&mut self, edit: F, now: Instant) -> bool
    where
        F: FnOnce(&str) -> String,
    {
        let next = edit(self.search.raw_input());
        if next == self.search.raw_input() {
            return false;
        }
        self.search.on_input_change(next, now);
        true
    }

    /// Esc in the search bar: clear text if any, otherwise leave the bar.
    pub fn search_escape(&mut self, now: Instant) {
        if self.search.raw_input().is_empty() {
            self.focus = FocusPane::Grid;
        } else {
            self.search.on_input_change(String::new(), now);
        }
    }

    /// Move keyboard focus to the item list.
    pub fn focus_grid(&mut self) {
        self.focus = FocusPane::Grid;
    }

    /// Commit a due search term.
    ///
    /// Returns `true` if the committed term changed; the selection goes
    /// back to the first row with the page.
    pub fn tick(&mut self, now: Instant) -> bool {
        let changed = self.search.tick(now);
        if changed {
            self.selected = 0;
        }
        changed
    }

    // ===== Key actions =====

    /// Dispatch a bound key action.
    ///
    /// Returns `true` if the application should quit.
    pub fn handle_action(&mut self, action: KeyAction, items: &[Item]) -> bool {
        if self.help_visible {
            return match action {
                KeyAction::Quit => true,
                KeyAction::Help | KeyAction::CloseDetail => {
                    self.help_visible = false;
                    false
                }
                _ => false,
            };
        }

        if self.detail.is_some() {
            if matches!(
                action,
                KeyAction::CloseDetail | KeyAction::OpenDetail | KeyAction::Quit
            ) {
                self.detail = None;
            }
            return false;
        }

        match action {
            KeyAction::Quit => return true,
            KeyAction::Help => self.help_visible = true,
            KeyAction::FocusSearch => self.focus = FocusPane::Search,
            KeyAction::CloseDetail => {}
            KeyAction::SelectNext => self.move_selection(items, 1),
            KeyAction::SelectPrev => self.move_selection(items, -1),
            KeyAction::NextPage => {
                let (page, _) = self.search.page_bounds(items);
                self.go_to_page(items, page + 1);
            }
            KeyAction::PrevPage => {
                let (page, _) = self.search.page_bounds(items);
                self.go_to_page(items, page.saturating_sub(1));
            }
            KeyAction::FirstPage => self.go_to_page(items, 1),
            KeyAction::LastPage => {
                let (_, total) = self.search.page_bounds(items);
                self.go_to_page(items, total);
            }
            KeyAction::OpenDetail => self.open_detail(items),
        }
        false
    }

    /// Press a page button. Out-of-range pages are ignored.
    pub fn go_to_page(&mut self, items: &[Item], page: usize) {
        let (_, total) = self.search.page_bounds(items);
        if page < 1 || page > total {
            return;
        }
        if self.search.on_page_change(page) {
            self.selected = 0;
        }
    }

    fn move_selection(&mut self, items: &[Item], delta: isize) {
        let view = self.search.page_view(items);
        let Some(current) = self.clamped_selection(&view) else {
            return;
        };
        let last = view.page_slice.len() - 1;
        self.selected = current.saturating_add_signed(delta).min(last);
    }

    fn open_detail(&mut self, items: &[Item]) {
        let view = self.search.page_view(items);
        if let Some(item) = self.selected_item(&view) {
            debug!(id = %item.id(), "opening detail");
            self.detail = Some(item.id().clone());
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ControllerSettings::default())
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
