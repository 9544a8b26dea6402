//! Styling for the catalog views.
//!
//! Colors are dropped entirely under `--no-color` or `NO_COLOR`; selection
//! and the active page then fall back to reverse video and bold.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Explicit setting, ignoring the environment.
    pub fn with_colors(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::with_colors(true)
    }
}

// ===== Type colors =====

/// Tag color used for a type name with no entry in the table.
pub const FALLBACK_TYPE_COLOR: Color = Color::Rgb(0x68, 0xA0, 0x90);

const TYPE_COLORS: &[(&str, Color)] = &[
    ("grass", Color::Rgb(0x78, 0xC8, 0x50)),
    ("poison", Color::Rgb(0xA0, 0x40, 0xA0)),
    ("fire", Color::Rgb(0xF0, 0x80, 0x30)),
    ("water", Color::Rgb(0x68, 0x90, 0xF0)),
    ("electric", Color::Rgb(0xF8, 0xD0, 0x30)),
    ("ice", Color::Rgb(0x98, 0xD8, 0xD8)),
    ("fighting", Color::Rgb(0xC0, 0x30, 0x28)),
    ("ground", Color::Rgb(0xE0, 0xC0, 0x68)),
    ("flying", Color::Rgb(0xA8, 0x90, 0xF0)),
    ("psychic", Color::Rgb(0xF8, 0x58, 0x88)),
    ("bug", Color::Rgb(0xA8, 0xB8, 0x20)),
    ("rock", Color::Rgb(0xB8, 0xA0, 0x38)),
    ("ghost", Color::Rgb(0x70, 0x58, 0x98)),
    ("dragon", Color::Rgb(0x70, 0x38, 0xF8)),
    ("dark", Color::Rgb(0x70, 0x58, 0x48)),
    ("steel", Color::Rgb(0xB8, 0xB8, 0xD0)),
    ("fairy", Color::Rgb(0xEE, 0x99, 0xAC)),
    ("normal", Color::Rgb(0xA8, 0xA8, 0x78)),
];

/// Tag color for a type name (case-insensitive).
pub fn type_color(type_name: &str) -> Color {
    TYPE_COLORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(type_name))
        .map_or(FALLBACK_TYPE_COLOR, |&(_, color)| color)
}

// ===== CatalogStyles =====

/// Styles for every catalog widget, resolved once per color setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogStyles {
    colors: ColorConfig,
    /// Selected row in the item list.
    pub selected: Style,
    /// Secondary text: catalog numbers, hints, disabled buttons.
    pub muted: Style,
    /// Keys in the help overlay and field names in the detail popup.
    pub key: Style,
    /// Section headers and popup titles.
    pub header: Style,
    /// Border of the focused pane.
    pub focused_border: Style,
    /// Current page button.
    pub active_page: Style,
    /// Load errors in the status line.
    pub error: Style,
}

impl CatalogStyles {
    /// Build the style set for a color configuration.
    pub fn new(colors: ColorConfig) -> Self {
        if colors.colors_enabled() {
            Self {
                colors,
                selected: Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
                muted: Style::default().fg(Color::DarkGray),
                key: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                header: Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                focused_border: Style::default().fg(Color::Cyan),
                active_page: Style::default()
                    .bg(Color::Cyan)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
                error: Style::default().fg(Color::Red),
            }
        } else {
            Self {
                colors,
                selected: Style::default().add_modifier(Modifier::REVERSED),
                muted: Style::default().add_modifier(Modifier::DIM),
                key: Style::default().add_modifier(Modifier::BOLD),
                header: Style::default().add_modifier(Modifier::BOLD),
                focused_border: Style::default().add_modifier(Modifier::BOLD),
                active_page: Style::default().add_modifier(Modifier::REVERSED),
                error: Style::default().add_modifier(Modifier::BOLD),
            }
        }
    }

    /// Tag style for a type name.
    pub fn type_tag(&self, type_name: &str) -> Style {
        if self.colors.colors_enabled() {
            Style::default()
                .bg(type_color(type_name))
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        }
    }
}

impl Default for CatalogStyles {
    fn default() -> Self {
        Self::new(ColorConfig::default())
    }
}

// ===== Tests =====
