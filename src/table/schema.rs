//! Fixed column schema of the classroom table.
//!
//! The schema is static configuration: labels, sort modes and per-column
//! search/render policies never depend on data.

use crate::table::cell::{CellValue, COLUMN_COUNT};

// Column indices, in display order.
pub const PROJECT: usize = 0;
pub const TEAM: usize = 1;
pub const STATUS: usize = 2;
pub const REGION: usize = 3;
pub const BRANCH: usize = 4;
pub const SCHOOL: usize = 5;
pub const SEMESTER: usize = 6;
pub const TOOLBOX: usize = 7;
pub const COMPANY_NAME: usize = 8;
pub const BUSINESS_DESCRIPTION: usize = 9;
pub const BUSINESS_PURPOSE: usize = 10;
pub const EARNINGS: usize = 11;

/// How a column orders its rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    /// Compare cell text.
    Lexicographic,
    /// Compare the integer prefix of the cell text.
    Numeric,
    /// Sorting is disabled in the UI.
    Unsortable,
}

/// How a column draws its cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRender {
    /// Single line of text.
    Text,
    /// One list element per line.
    Lines,
}

/// Column-specific search matcher, called with `(query, cell)`.
pub type CellMatcher = fn(&str, &CellValue) -> bool;

/// Descriptor of one column.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub label: &'static str,
    pub sort_mode: SortMode,
    pub search: Option<CellMatcher>,
    pub render: CellRender,
}

impl Column {
    const fn text(label: &'static str) -> Self {
        Self {
            label,
            sort_mode: SortMode::Lexicographic,
            search: None,
            render: CellRender::Text,
        }
    }

    pub fn is_sortable(&self) -> bool {
        self.sort_mode != SortMode::Unsortable
    }
}

/// The full ordered column list.
pub type ColumnSchema = [Column; COLUMN_COUNT];

/// The classroom table schema.
pub static COLUMNS: ColumnSchema = [
    Column::text("Projekt"),
    Column {
        label: "Tým",
        sort_mode: SortMode::Unsortable,
        search: Some(team_matches),
        render: CellRender::Lines,
    },
    Column::text("Stav projektu"),
    Column {
        label: "Region",
        sort_mode: SortMode::Unsortable,
        search: None,
        render: CellRender::Lines,
    },
    Column::text("Pobočka"),
    Column::text("Škola"),
    Column::text("Pololetí"),
    Column::text("Toolbox"),
    Column::text("Název firmy"),
    Column::text("V čem děti podnikají"),
    Column::text("Výdělek použití"),
    Column {
        label: "Výdělek (Kč)",
        sort_mode: SortMode::Numeric,
        search: None,
        render: CellRender::Text,
    },
];

/// Team column matcher.
///
/// A user matches when the query is a substring of the name the table shows
/// for them: full name when activated, email otherwise.
pub fn team_matches(query: &str, cell: &CellValue) -> bool {
    match cell {
        CellValue::UserList(users) => users
            .iter()
            .any(|user| user.display_name().contains(query)),
        CellValue::Text(_) | CellValue::StringList(_) => false,
    }
}

/// Whether `column` can be sorted from the UI.
pub fn is_sortable(column: usize) -> bool {
    COLUMNS.get(column).is_some_and(Column::is_sortable)
}
