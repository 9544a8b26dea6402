//! Screen layout.
//!
//! Pure layout logic: splits the frame into search bar, item list,
//! pagination bar and status line, then draws the popups on top.

use super::constants::{PAGINATION_BAR_HEIGHT, SEARCH_INPUT_HEIGHT, STATUS_BAR_HEIGHT};
use super::detail_modal::render_detail_modal;
use super::help::render_help_overlay;
use super::item_list::ItemList;
use super::loading::LoadingIndicator;
use super::pagination_bar::PaginationBar;
use super::search_input::SearchInput;
use super::styles::CatalogStyles;
use crate::model::CatalogSnapshot;
use crate::state::{AppState, CatalogView, FocusPane, PageView};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Everything needed to draw one frame.
pub struct Screen<'a> {
    /// UI state.
    pub state: &'a AppState,
    /// Current catalog contents.
    pub snapshot: &'a CatalogSnapshot,
    /// Resolved styles.
    pub styles: &'a CatalogStyles,
    /// Where the catalog comes from, for the loading indicator.
    pub source_label: &'a str,
    /// Animation counter for the loading spinner.
    pub tick: usize,
}

/// Areas of the main layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Search bar.
    pub search: Rect,
    /// Item list (or loading indicator).
    pub list: Rect,
    /// Pagination bar.
    pub pagination: Rect,
    /// Status line.
    pub status: Rect,
}

/// Split the frame area into the four stacked regions.
pub fn calculate_areas(area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SEARCH_INPUT_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(PAGINATION_BAR_HEIGHT),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    ScreenAreas {
        search: chunks[0],
        list: chunks[1],
        pagination: chunks[2],
        status: chunks[3],
    }
}

/// Render the whole screen.
pub fn render_layout(frame: &mut Frame, screen: &Screen<'_>) {
    let areas = calculate_areas(frame.area());
    let state = screen.state;
    let styles = screen.styles;

    frame.render_widget(
        SearchInput::new(state.search.raw_input(), styles)
            .focused(state.focus == FocusPane::Search)
            .pending(state.search.is_debouncing()),
        areas.search,
    );

    match state.search.view(screen.snapshot) {
        CatalogView::Loading { .. } => {
            frame.render_widget(
                LoadingIndicator::new(screen.source_label, screen.tick, styles),
                areas.list,
            );
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled("Loading…", styles.muted))),
                areas.status,
            );
        }
        CatalogView::Ready(view) => {
            frame.render_widget(
                ItemList::new(&view.page_slice, styles)
                    .selected(state.clamped_selection(&view))
                    .focused(state.focus == FocusPane::Grid),
                areas.list,
            );
            frame.render_widget(PaginationBar::new(&view.page_controls, styles), areas.pagination);
            frame.render_widget(
                Paragraph::new(status_line(state, &view, styles)),
                areas.status,
            );
        }
    }

    if let Some(item) = state
        .detail_target()
        .and_then(|id| screen.snapshot.find(id))
    {
        render_detail_modal(frame, item, styles);
    }

    if state.help_visible {
        render_help_overlay(frame, styles);
    }
}

/// Status line: counts, page position, committed filter, load error, hints.
pub fn status_line(state: &AppState, view: &PageView<'_>, styles: &CatalogStyles) -> Line<'static> {
    let noun = if view.match_count == 1 { "item" } else { "items" };
    let mut spans = vec![Span::raw(format!(" {} {noun}", view.match_count))];

    if view.total_pages > 0 {
        spans.push(Span::raw(format!(
            " · page {}/{}",
            view.clamped_page, view.total_pages
        )));
    }

    if !view.committed_term.is_empty() {
        spans.push(Span::styled(
            format!(" · filter \"{}\"", view.committed_term),
            styles.muted,
        ));
    }

    if let Some(err) = state.load_error() {
        spans.push(Span::styled(format!(" · {err}"), styles.error));
    }

    spans.push(Span::styled("  ? help  q quit", styles.muted));
    Line::from(spans)
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
