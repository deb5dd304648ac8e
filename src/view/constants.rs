//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the page title line.
pub const TITLE_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
///
/// Page position, page size and active sort.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of the search input widget in lines.
///
/// Used when search is typing or submitted. Includes border and text input area.
pub const SEARCH_INPUT_HEIGHT: u16 = 3;

/// Height of the column header row.
pub const HEADER_HEIGHT: u16 = 1;

/// Blank columns between two table columns.
pub const COLUMN_SPACING: u16 = 1;

/// Narrowest a column is ever drawn.
pub const MIN_COLUMN_WIDTH: u16 = 4;

/// Widest a column is ever drawn. Longer cell text is clipped.
pub const MAX_COLUMN_WIDTH: u16 = 32;

/// Width reserved after a header label for the sort arrow.
pub const SORT_ARROW_WIDTH: u16 = 2;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Width percentage for detail dialogs.
pub const DETAIL_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for detail dialogs.
pub const DETAIL_POPUP_HEIGHT_PERCENT: u16 = 60;

/// Offset (right and down) between two stacked detail dialogs.
pub const DETAIL_CASCADE_STEP: u16 = 2;

/// Frames of the loading spinner, advanced on every timer tick.
pub const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];
