//! Domain-level keyboard actions independent of key bindings.

/// User intent in the item grid, independent of the physical key.
///
/// The mapping from `crossterm::event::KeyEvent` to `KeyAction` is owned
/// by `KeyBindings`. Text typed into the search bar bypasses this table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Selection
    /// Move selection to the next item on the page. Default: j/↓
    SelectNext,
    /// Move selection to the previous item on the page. Default: k/↑
    SelectPrev,

    // Paging
    /// Go to the next page. Default: l/→/]/Page Down
    NextPage,
    /// Go to the previous page. Default: h/←/[/Page Up
    PrevPage,
    /// Jump to the first page. Default: g/Home
    FirstPage,
    /// Jump to the last page. Default: G/End
    LastPage,

    // Detail popup
    /// Open the detail popup for the selected item. Default: Enter/Space
    OpenDetail,
    /// Close the detail popup. Default: Esc
    CloseDetail,

    // Search
    /// Move focus to the search bar. Default: / or Ctrl+f
    FocusSearch,

    // Application
    /// Toggle the help overlay. Default: ?
    Help,
    /// Exit the application. Default: q
    Quit,
}
