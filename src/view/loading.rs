//! Loading indicator shown while the catalog source is in flight.

use super::styles::CatalogStyles;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// "Loading catalog" box with a spinner frame chosen by `tick`.
pub struct LoadingIndicator<'a> {
    source: &'a str,
    tick: usize,
    styles: &'a CatalogStyles,
}

impl<'a> LoadingIndicator<'a> {
    /// Create the indicator for a source label (file path or "stdin").
    pub fn new(source: &'a str, tick: usize, styles: &'a CatalogStyles) -> Self {
        Self {
            source,
            tick,
            styles,
        }
    }
}

impl Widget for LoadingIndicator<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let spinner = SPINNER[self.tick % SPINNER.len()];
        let block = Block::default().borders(Borders::ALL).title(" Items ");

        // Vertically center the message inside the block.
        let inner = block.inner(area);
        let padding = inner.height.saturating_sub(1) / 2;
        let mut lines = vec![Line::from(""); padding as usize];
        lines.push(Line::from(vec![
            Span::styled(format!("{spinner} "), self.styles.key),
            Span::raw(format!("Loading catalog from {}", self.source)),
        ]));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(tick: usize) -> String {
        let styles = CatalogStyles::default();
        let mut terminal = Terminal::new(TestBackend::new(50, 5)).unwrap();
        terminal
            .draw(|frame| {
                frame.render_widget(LoadingIndicator::new("stdin", tick, &styles), frame.area())
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn names_the_source() {
        assert!(render(0).contains("Loading catalog from stdin"));
    }

    #[test]
    fn spinner_advances_with_tick() {
        assert!(render(0).contains("| Loading"));
        assert!(render(1).contains("/ Loading"));
        assert!(render(4).contains("| Loading"));
    }
}
