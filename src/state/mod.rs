//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;
pub mod detail;
pub mod mouse_handler;
pub mod search;
pub mod search_input_handler;

// Re-export for convenience
pub use app_state::AppState;
pub use detail::{DetailSlots, STACKING_ORDER};
pub use mouse_handler::{
    detect_table_click, handle_table_click, ClickOutcome, ColumnSpan, RowSpan, TableClick,
    TableGeometry,
};
pub use search::{SearchQuery, SearchState};
