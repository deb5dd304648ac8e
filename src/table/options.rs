//! Table-level operating parameters.
//!
//! These are fixed settings of the classroom table, not user-facing flags.
//! Only the rows-per-page value can be changed at runtime (within the
//! offered options).

/// Filter widget style offered above the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterType {
    Checkbox,
    Dropdown,
    MultiSelect,
    TextField,
}

/// Row selection mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectableRows {
    None,
    Single,
    Multiple,
}

/// Behaviour when the table is wider than the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Responsive {
    Stacked,
    Scroll,
}

/// Page sizes the user can pick from.
pub const ROWS_PER_PAGE_OPTIONS: [usize; 6] = [10, 50, 100, 200, 500, 1000];

/// Default page size.
pub const DEFAULT_ROWS_PER_PAGE: usize = 1000;

/// Table configuration surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    pub filter_type: FilterType,
    pub selectable_rows: SelectableRows,
    pub fixed_header: bool,
    pub download: bool,
    pub print: bool,
    pub filter: bool,
    pub responsive: Responsive,
    pub rows_per_page: usize,
    pub rows_per_page_options: &'static [usize],
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            filter_type: FilterType::MultiSelect,
            selectable_rows: SelectableRows::None,
            fixed_header: true,
            download: false,
            print: false,
            filter: false,
            responsive: Responsive::Scroll,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            rows_per_page_options: &ROWS_PER_PAGE_OPTIONS,
        }
    }
}

impl TableOptions {
    /// Options with a different page size, if it is one of the offered sizes.
    pub fn with_rows_per_page(mut self, rows_per_page: usize) -> Option<Self> {
        is_valid_page_size(rows_per_page).then(|| {
            self.rows_per_page = rows_per_page;
            self
        })
    }
}

/// Whether `rows_per_page` is one of the offered page sizes.
pub fn is_valid_page_size(rows_per_page: usize) -> bool {
    ROWS_PER_PAGE_OPTIONS.contains(&rows_per_page)
}

/// Next larger (or smaller, when `larger` is false) page size, clamped at the ends.
pub fn step_page_size(current: usize, larger: bool) -> usize {
    let position = ROWS_PER_PAGE_OPTIONS
        .iter()
        .position(|&size| size == current)
        .unwrap_or(ROWS_PER_PAGE_OPTIONS.len() - 1);
    let next = if larger {
        (position + 1).min(ROWS_PER_PAGE_OPTIONS.len() - 1)
    } else {
        position.saturating_sub(1)
    };
    ROWS_PER_PAGE_OPTIONS[next]
}
