//! Pagination bar widget.

use super::styles::CatalogStyles;
use crate::state::PageControl;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Renders `‹ Prev  1 … 4 5 [6] 7 8 … 20  Next ›` from a control list.
///
/// Draws nothing for an empty list (one page or less).
pub struct PaginationBar<'a> {
    controls: &'a [PageControl],
    styles: &'a CatalogStyles,
}

impl<'a> PaginationBar<'a> {
    /// Create a bar for the given controls.
    pub fn new(controls: &'a [PageControl], styles: &'a CatalogStyles) -> Self {
        Self { controls, styles }
    }

    fn span(&self, control: PageControl) -> Span<'static> {
        match control {
            PageControl::Prev { enabled } => self.button("‹ Prev", enabled),
            PageControl::Next { enabled } => self.button("Next ›", enabled),
            PageControl::Ellipsis => Span::styled("…", self.styles.muted),
            PageControl::Page {
                number,
                active: true,
            } => Span::styled(format!("[{number}]"), self.styles.active_page),
            PageControl::Page { number, .. } => Span::raw(number.to_string()),
        }
    }

    fn button(&self, label: &'static str, enabled: bool) -> Span<'static> {
        if enabled {
            Span::raw(label)
        } else {
            Span::styled(label, self.styles.muted)
        }
    }
}

impl Widget for PaginationBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.controls.is_empty() {
            return;
        }

        let mut spans = Vec::with_capacity(self.controls.len() * 2);
        for (idx, control) in self.controls.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(self.span(*control));
        }

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
