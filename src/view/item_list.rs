//! Item list widget for the current page.

use super::helpers::truncate_to_width;
use super::styles::CatalogStyles;
use crate::model::Item;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Text shown when nothing matches the committed term.
pub const EMPTY_TEXT: &str = "No items found";

/// One page of items, one row each: `number - name  type type`.
pub struct ItemList<'a> {
    items: &'a [&'a Item],
    selected: Option<usize>,
    focused: bool,
    styles: &'a CatalogStyles,
}

impl<'a> ItemList<'a> {
    /// Create an item list over the current page slice.
    pub fn new(items: &'a [&'a Item], styles: &'a CatalogStyles) -> Self {
        Self {
            items,
            selected: None,
            focused: false,
            styles,
        }
    }

    /// Row to highlight.
    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    /// Whether the list has keyboard focus.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn row(&self, item: &Item, width: usize, is_selected: bool) -> Line<'static> {
        let mut spans = Vec::new();
        let mut used = 0;

        if let Some(number) = item.number() {
            let prefix = format!("{number} - ");
            used += prefix.width();
            spans.push(Span::styled(prefix, self.styles.muted));
        }

        let tags: Vec<String> = item.types().iter().map(|t| format!(" {t} ")).collect();
        let tags_width: usize = tags.iter().map(|t| t.width() + 1).sum();

        // Tags are dropped before the name is squeezed below 8 columns.
        let show_tags = width.saturating_sub(used + tags_width) >= 8;
        let name_budget = if show_tags {
            width.saturating_sub(used + tags_width)
        } else {
            width.saturating_sub(used)
        };
        spans.push(Span::raw(truncate_to_width(item.name(), name_budget)));

        if show_tags {
            for (tag, type_name) in tags.into_iter().zip(item.types()) {
                spans.push(Span::raw(" "));
                spans.push(Span::styled(tag, self.styles.type_tag(type_name)));
            }
        }

        let line = Line::from(spans);
        if is_selected {
            line.style(self.styles.selected)
        } else {
            line
        }
    }
}

impl Widget for ItemList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.styles.focused_border
        } else {
            Style::default()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Items ")
            .border_style(border_style);
        let inner_width = block.inner(area).width as usize;

        if self.items.is_empty() {
            Paragraph::new(Line::from(Span::styled(EMPTY_TEXT, self.styles.muted)))
                .alignment(Alignment::Center)
                .block(block)
                .render(area, buf);
            return;
        }

        let offset = scroll_offset(self.selected, block.inner(area).height);
        let lines: Vec<Line<'static>> = self
            .items
            .iter()
            .enumerate()
            .map(|(idx, item)| self.row(item, inner_width, self.selected == Some(idx)))
            .collect();

        Paragraph::new(lines)
            .block(block)
            .scroll((offset, 0))
            .render(area, buf);
    }
}

/// First visible row so that `selected` stays inside `visible_rows`.
///
/// Rows above the fold scroll off only once the selection moves past the
/// last visible row; the selected row then sits at the bottom.
fn scroll_offset(selected: Option<usize>, visible_rows: u16) -> u16 {
    let Some(selected) = selected else {
        return 0;
    };
    let visible = usize::from(visible_rows);
    if visible == 0 || selected < visible {
        return 0;
    }
    u16::try_from(selected + 1 - visible).unwrap_or(u16::MAX)
}
