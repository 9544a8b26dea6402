//! Small rendering helpers shared by the widgets.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Blank line for spacing.
pub fn empty_line() -> Line<'static> {
    Line::from("")
}

/// `"  key: value"` line with a styled key.
pub fn key_value_line(key: &str, value: String, key_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key}: "), key_style),
        Span::raw(value),
    ])
}

/// Rect centered in `area` covering the given percentages of it.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = scale(area.width, percent_x);
    let height = scale(area.height, percent_y);

    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

/// `percent`% of `length`, computed wide so large terminals cannot overflow.
fn scale(length: u16, percent: u16) -> u16 {
    let scaled = u32::from(length) * u32::from(percent.min(100)) / 100;
    u16::try_from(scaled).unwrap_or(length)
}

/// Cut `text` to at most `max_width` terminal columns, ending in `…` when cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Zero-pad a catalog number to `width` digits.
///
/// Non-numeric numbers are shown as given.
pub fn pad_number(number: &str, width: usize) -> String {
    if !number.is_empty() && number.chars().all(|c| c.is_ascii_digit()) {
        format!("{number:0>width$}")
    } else {
        number.to_string()
    }
}
