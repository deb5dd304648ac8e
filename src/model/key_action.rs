//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Cell selection
    /// Select the row above. Default: k/↑
    SelectUp,
    /// Select the row below. Default: j/↓
    SelectDown,
    /// Select the column to the left. Default: h/←
    SelectLeft,
    /// Select the column to the right. Default: l/→
    SelectRight,
    /// Jump to the first row of the page. Default: g/Home
    SelectFirst,
    /// Jump to the last row of the page. Default: G/End
    SelectLast,

    // Table interaction
    /// Open the detail dialog for the selected cell, like a click. Default: Enter
    OpenDetail,
    /// Sort by the selected column, toggling direction on repeat. Default: s
    SortColumn,

    // Pagination
    /// Next page. Default: ]/Page Down
    NextPage,
    /// Previous page. Default: [/Page Up
    PrevPage,
    /// Next larger rows-per-page option. Default: +
    NextPageSize,
    /// Next smaller rows-per-page option. Default: -
    PrevPageSize,

    // Search
    /// Activate search input. Default: //Ctrl+f
    StartSearch,
    /// Keep the typed query and leave the input. Default: Enter while typing
    SubmitSearch,
    /// Clear the query and show all rows. Default: Esc while typing
    CancelSearch,

    // Dialogs
    /// Close the top-most detail dialog, or clear a submitted search when no
    /// dialog is open. Default: Esc
    CloseDetail,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
}
