//! Layout dimension constants for TUI rendering.

/// Height of the search bar in lines (border + input line).
pub const SEARCH_INPUT_HEIGHT: u16 = 3;

/// Height of the pagination bar in lines.
pub const PAGINATION_BAR_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Width percentage for the item detail popup.
pub const DETAIL_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for the item detail popup.
pub const DETAIL_POPUP_HEIGHT_PERCENT: u16 = 70;

/// Minimum digits shown for a catalog number (`7` renders as `#007`).
pub const NUMBER_PAD_WIDTH: usize = 3;
