//! Display cells and rows.

use crate::model::User;

/// Number of columns in the classroom table.
pub const COLUMN_COUNT: usize = 12;

/// Placeholder shown for absent values.
pub const PLACEHOLDER: &str = "-";

/// One table cell.
///
/// Cells are heterogeneous; the variant decides how a cell is searched,
/// sorted and drawn.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Plain text, including the `-` placeholder and the phase progress.
    Text(String),
    /// Team members.
    UserList(Vec<User>),
    /// Per-user values such as regions. A user without a value contributes
    /// `None`, which is not a string and never matches a search.
    StringList(Vec<Option<String>>),
}

impl CellValue {
    /// Text content, `None` for list cells.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(text) => Some(text),
            CellValue::UserList(_) | CellValue::StringList(_) => None,
        }
    }

    /// Lines the cell renders as. List cells render one element per line.
    pub fn display_lines(&self) -> Vec<String> {
        match self {
            CellValue::Text(text) => vec![text.clone()],
            CellValue::UserList(users) => users.iter().map(User::display_name).collect(),
            CellValue::StringList(values) => values
                .iter()
                .map(|value| value.clone().unwrap_or_default())
                .collect(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(text: &str) -> Self {
        CellValue::Text(text.to_string())
    }
}

impl From<String> for CellValue {
    fn from(text: String) -> Self {
        CellValue::Text(text)
    }
}

/// A projected classroom: exactly one cell per column, in column order.
///
/// The fixed-size array makes the cell count a type-level invariant.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow([CellValue; COLUMN_COUNT]);

impl DisplayRow {
    pub fn new(cells: [CellValue; COLUMN_COUNT]) -> Self {
        Self(cells)
    }

    pub fn cells(&self) -> &[CellValue; COLUMN_COUNT] {
        &self.0
    }

    /// Cell at `column`, `None` when out of range.
    pub fn cell(&self, column: usize) -> Option<&CellValue> {
        self.0.get(column)
    }

    pub fn len(&self) -> usize {
        COLUMN_COUNT
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}
