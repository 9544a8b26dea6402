//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with the shortcuts grouped by pane.
//! Triggered by '?' in the item list, dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::helpers::{centered_rect, empty_line};
use super::styles::CatalogStyles;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Search bar",
        &[
            ("type", "Edit the search (applies after a pause)"),
            ("Backspace", "Delete last character"),
            ("Ctrl+w", "Delete last word"),
            ("Ctrl+u", "Clear the search"),
            ("Enter/Tab/↓", "Move to the item list"),
            ("Esc", "Clear, or move to the list when empty"),
        ],
    ),
    (
        "Item list",
        &[
            ("j/↓  k/↑", "Select next / previous item"),
            ("l/→/]  h/←/[", "Next / previous page"),
            ("PgDn  PgUp", "Next / previous page"),
            ("g/Home  G/End", "First / last page"),
            ("Enter/Space", "Show item details"),
            ("/  Ctrl+f", "Focus the search bar"),
        ],
    ),
    (
        "Application",
        &[
            ("?", "Toggle this help"),
            ("q", "Quit"),
            ("Ctrl+c", "Quit from anywhere"),
        ],
    ),
];

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, styles: &CatalogStyles) {
    let popup_area = centered_rect(
        HELP_POPUP_WIDTH_PERCENT,
        HELP_POPUP_HEIGHT_PERCENT,
        frame.area(),
    );

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(styles))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(styles.focused_border),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    if popup_area.height > 2 {
        let hint_area = Rect {
            x: popup_area.x,
            y: popup_area.y + popup_area.height - 1,
            width: popup_area.width,
            height: 1,
        };
        let hint = Paragraph::new(Line::from(vec![Span::styled(
            " Press Esc or ? to close ",
            styles.muted,
        )]))
        .alignment(Alignment::Center);
        frame.render_widget(hint, hint_area);
    }
}

/// Build the help content lines grouped by category.
fn build_help_content(styles: &CatalogStyles) -> Vec<Line<'static>> {
    let key_width = SECTIONS
        .iter()
        .flat_map(|(_, rows)| rows.iter())
        .map(|(key, _)| key.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::new();
    for (idx, (title, rows)) in SECTIONS.iter().enumerate() {
        if idx > 0 {
            lines.push(empty_line());
        }
        lines.push(Line::from(Span::styled(*title, styles.header)));
        for (key, desc) in rows.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<key_width$}  "), styles.key),
                Span::styled(*desc, Style::default()),
            ]));
        }
    }
    lines
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
