//! Search bar widget.

use super::styles::CatalogStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const PLACEHOLDER: &str = "Search by name...";

/// Search bar showing the raw input.
///
/// The raw input is echoed immediately; a pending (not yet committed)
/// edit is flagged in the title.
pub struct SearchInput<'a> {
    raw_input: &'a str,
    focused: bool,
    pending: bool,
    styles: &'a CatalogStyles,
}

impl<'a> SearchInput<'a> {
    /// Create new SearchInput widget.
    pub fn new(raw_input: &'a str, styles: &'a CatalogStyles) -> Self {
        Self {
            raw_input,
            focused: false,
            pending: false,
            styles,
        }
    }

    /// Whether the bar has keyboard focus (draws the cursor).
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Whether an edit is waiting for the debounce to elapse.
    pub fn pending(mut self, pending: bool) -> Self {
        self.pending = pending;
        self
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::with_capacity(2);

        if self.raw_input.is_empty() && !self.focused {
            spans.push(Span::styled(PLACEHOLDER, self.styles.muted));
        } else {
            spans.push(Span::raw(self.raw_input));
        }

        if self.focused {
            spans.push(Span::styled(" ", self.styles.selected));
        }

        let title = if self.pending {
            " Search (typing…) "
        } else {
            " Search "
        };
        let border_style = if self.focused {
            self.styles.focused_border
        } else {
            Style::default()
        };

        Paragraph::new(Line::from(spans))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(border_style),
            )
            .render(area, buf);
    }
}
