//! Item detail popup.

use super::constants::{DETAIL_POPUP_HEIGHT_PERCENT, DETAIL_POPUP_WIDTH_PERCENT, NUMBER_PAD_WIDTH};
use super::helpers::{centered_rect, empty_line, key_value_line, pad_number};
use super::styles::CatalogStyles;
use crate::model::Item;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use serde_json::Value;

/// Render the detail popup for `item` centered over the frame.
pub fn render_detail_modal(frame: &mut Frame, item: &Item, styles: &CatalogStyles) {
    let popup_area = centered_rect(
        DETAIL_POPUP_WIDTH_PERCENT,
        DETAIL_POPUP_HEIGHT_PERCENT,
        frame.area(),
    );

    frame.render_widget(Clear, popup_area);

    let paragraph = Paragraph::new(build_detail_lines(item, styles))
        .block(
            Block::default()
                .title(format!(" {} ", item.name()))
                .borders(Borders::ALL)
                .border_style(styles.focused_border),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, popup_area);

    if popup_area.height > 2 {
        let hint_area = Rect {
            x: popup_area.x,
            y: popup_area.y + popup_area.height - 1,
            width: popup_area.width,
            height: 1,
        };
        let hint = Paragraph::new(Span::styled(" Esc/Enter/q to close ", styles.muted))
            .alignment(Alignment::Center);
        frame.render_widget(hint, hint_area);
    }
}

/// Lines of the popup body.
pub fn build_detail_lines(item: &Item, styles: &CatalogStyles) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if let Some(number) = item.number() {
        lines.push(Line::from(Span::styled(
            format!("#{}", pad_number(number, NUMBER_PAD_WIDTH)),
            styles.header,
        )));
    }
    lines.push(Line::from(Span::styled(item.name().to_string(), styles.header)));
    lines.push(empty_line());

    if !item.types().is_empty() {
        let mut spans = vec![Span::styled("  Types: ", styles.key)];
        for (idx, type_name) in item.types().iter().enumerate() {
            if idx > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(
                format!(" {type_name} "),
                styles.type_tag(type_name),
            ));
        }
        lines.push(Line::from(spans));
    }

    if let Some(image) = item.image() {
        lines.push(key_value_line("Image", image.to_string(), styles.key));
    }

    lines.push(key_value_line("ID", item.id().to_string(), styles.key));

    if !item.extra().is_empty() {
        lines.push(empty_line());
        for (key, value) in item.extra() {
            lines.push(key_value_line(key, display_value(value), styles.key));
        }
    }

    lines
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}
