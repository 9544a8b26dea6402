//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;
pub mod debounce;
pub mod filter;
pub mod pagination;
pub mod search_controller;
pub mod search_input_handler;

// Re-export for convenience
pub use app_state::{AppState, FocusPane};
pub use debounce::{debounce, Debounced, Debouncer};
pub use filter::filter_items;
pub use pagination::{
    clamp_page, page_controls, paginate, total_pages, visible_page_window, InvalidPageSize, Page,
    PageControl, PageSize,
};
pub use search_controller::{
    CatalogView, ControllerSettings, PageView, SearchController, SearchMode,
};
