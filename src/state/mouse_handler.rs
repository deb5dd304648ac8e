//! Mouse event handler.
//!
//! Hit-testing against the geometry of the last rendered table, and the
//! state transitions a left click triggers.

use crate::state::AppState;
use crate::table::DetailKind;
use ratatui::layout::Rect;

/// Horizontal extent of one rendered column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpan {
    pub column: usize,
    pub x: u16,
    pub width: u16,
}

/// Vertical extent of one rendered body row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSpan {
    /// Position of the row within the current page.
    pub position: usize,
    pub y: u16,
    pub height: u16,
}

/// Where the table was drawn in the last frame.
///
/// Only columns and rows that were actually visible are listed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableGeometry {
    pub header: Rect,
    pub columns: Vec<ColumnSpan>,
    pub rows: Vec<RowSpan>,
}

/// Result of hit-testing a click against the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableClick {
    /// Click on a column header.
    Header(usize),
    /// Click on a body cell.
    Cell { position: usize, column: usize },
    /// Click outside the table, or in a gap between columns.
    Outside,
}

/// Detect which part of the table (if any) was clicked.
pub fn detect_table_click(click_x: u16, click_y: u16, geometry: &TableGeometry) -> TableClick {
    let Some(column) = geometry
        .columns
        .iter()
        .find(|span| click_x >= span.x && click_x < span.x.saturating_add(span.width))
        .map(|span| span.column)
    else {
        return TableClick::Outside;
    };

    let header = geometry.header;
    if click_y >= header.y && click_y < header.y.saturating_add(header.height) {
        return TableClick::Header(column);
    }

    geometry
        .rows
        .iter()
        .find(|row| click_y >= row.y && click_y < row.y.saturating_add(row.height))
        .map_or(TableClick::Outside, |row| TableClick::Cell {
            position: row.position,
            column,
        })
}

/// Outcome of a handled click, for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Sorted(usize),
    Opened(DetailKind),
    Ignored,
}

/// Handle a left click.
///
/// - Header: sort by that column (unsortable headers do nothing)
/// - Cell: select the cell and route it to its detail dialog
pub fn handle_table_click(state: &mut AppState, click: TableClick) -> ClickOutcome {
    match click {
        TableClick::Header(column) => {
            if state.toggle_sort(column) {
                ClickOutcome::Sorted(column)
            } else {
                ClickOutcome::Ignored
            }
        }
        TableClick::Cell { position, column } => {
            state.select_cell(position, column);
            state
                .open_detail_at(position, column)
                .map_or(ClickOutcome::Ignored, ClickOutcome::Opened)
        }
        TableClick::Outside => ClickOutcome::Ignored,
    }
}

#[cfg(test)]
#[path = "mouse_handler_tests.rs"]
mod tests;
