//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state. It owns the
//! query result and reflects the table engine's output (visible rows, open
//! dialogs) without doing any transformation itself.

use crate::model::{ClassroomRecord, QueryResult};
use crate::state::{DetailSlots, SearchState};
use crate::table::options::{is_valid_page_size, step_page_size};
use crate::table::{
    build_rows, route, schema, DetailKind, SortDirection, SortSpec, TableOptions, TableRow,
    COLUMN_COUNT,
};
use tracing::debug;

// ===== AppState =====

/// Application state. Pure data, no side effects.
///
/// # Selection
///
/// The selected row is a position within the current page of visible rows,
/// not a record index. Record lookups for clicks go through the row's data
/// index, so filtering and sorting never route to the wrong record.
///
/// # Paging
///
/// Changing the search or the page size returns to the first page. Every
/// transition re-clamps page and selection to the current row count. The
/// count is only recomputed when the records or the filter change, so row
/// and page navigation never rebuild the table.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Latest answer of the query collaborator.
    query: QueryResult,

    /// Page title shown above the table.
    pub title: String,

    /// Current search state. Change it through [`AppState::set_search`] so
    /// the page is reset when the filter changes.
    search: SearchState,

    /// Active sort, if the user (or config) picked one.
    sort: Option<SortSpec>,

    /// Zero-based page index.
    page: usize,

    /// Selected row, as a position within the current page.
    selected_row: usize,

    /// Selected column index.
    selected_column: usize,

    /// Number of rows passing the current filter.
    row_count: usize,

    /// Open detail dialogs.
    pub details: DetailSlots,

    /// Whether the help overlay is currently visible.
    pub help_visible: bool,

    options: TableOptions,
}

impl AppState {
    /// Create a loading state with the given title and table options.
    pub fn new(title: impl Into<String>, options: TableOptions) -> Self {
        Self {
            query: QueryResult::Loading,
            title: title.into(),
            search: SearchState::Inactive,
            sort: None,
            page: 0,
            selected_row: 0,
            selected_column: 0,
            row_count: 0,
            details: DetailSlots::default(),
            help_visible: false,
            options,
        }
    }

    /// Initial sort. Unsortable columns are ignored.
    pub fn with_sort(mut self, sort: Option<SortSpec>) -> Self {
        self.sort = sort.filter(|spec| schema::is_sortable(spec.column));
        self
    }

    // ===== Accessors =====

    pub fn query(&self) -> &QueryResult {
        &self.query
    }

    /// Records in API order. Empty while loading or after an error.
    pub fn records(&self) -> &[ClassroomRecord] {
        self.query.classrooms()
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn rows_per_page(&self) -> usize {
        self.options.rows_per_page
    }

    pub fn selected_row(&self) -> usize {
        self.selected_row
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    /// Number of rows passing the current filter, across all pages.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    // ===== Derived rows =====

    /// Every row passing the search, in display order.
    pub fn visible_rows(&self) -> Vec<TableRow> {
        build_rows(self.records(), self.search.filter_text(), self.sort)
    }

    /// Number of pages for `row_count` visible rows. Never 0.
    pub fn page_count(&self, row_count: usize) -> usize {
        row_count.div_ceil(self.rows_per_page()).max(1)
    }

    /// The slice of `rows` on the current page.
    pub fn page_rows<'a>(&self, rows: &'a [TableRow]) -> &'a [TableRow] {
        let start = (self.page * self.rows_per_page()).min(rows.len());
        let end = (start + self.rows_per_page()).min(rows.len());
        &rows[start..end]
    }

    /// Rows on the current page.
    fn page_len(&self) -> usize {
        let start = self.page * self.rows_per_page();
        self.row_count
            .saturating_sub(start)
            .min(self.rows_per_page())
    }

    // ===== Transitions =====

    /// Replace the query result (records are replaced wholesale).
    pub fn set_query(&mut self, query: QueryResult) {
        self.query = query;
        self.recount();
        self.clamp();
    }

    /// Replace the search state. A changed filter returns to the first row
    /// of the first page.
    pub fn set_search(&mut self, search: SearchState) {
        let changed = search.filter_text() != self.search.filter_text();
        self.search = search;
        if changed {
            self.page = 0;
            self.selected_row = 0;
            self.recount();
        }
        self.clamp();
    }

    /// Sort by `column`, or flip the direction if it is already the sort
    /// column. Returns false (and does nothing) for unsortable columns.
    pub fn toggle_sort(&mut self, column: usize) -> bool {
        if !schema::is_sortable(column) {
            return false;
        }
        self.sort = Some(match self.sort {
            Some(spec) if spec.column == column => SortSpec {
                column,
                direction: spec.direction.toggled(),
            },
            _ => SortSpec {
                column,
                direction: SortDirection::Asc,
            },
        });
        debug!(sort = ?self.sort, "Sort changed");
        self.clamp();
        true
    }

    pub fn select_next_row(&mut self) {
        let len = self.page_len();
        if self.selected_row + 1 < len {
            self.selected_row += 1;
        }
    }

    pub fn select_prev_row(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    pub fn select_first_row(&mut self) {
        self.selected_row = 0;
    }

    pub fn select_last_row(&mut self) {
        self.selected_row = self.page_len().saturating_sub(1);
    }

    pub fn select_next_column(&mut self) {
        self.selected_column = (self.selected_column + 1).min(COLUMN_COUNT - 1);
    }

    pub fn select_prev_column(&mut self) {
        self.selected_column = self.selected_column.saturating_sub(1);
    }

    /// Select a cell by page position and column (e.g. from a click).
    pub fn select_cell(&mut self, position: usize, column: usize) {
        self.selected_row = position;
        self.selected_column = column;
        self.clamp();
    }

    pub fn next_page(&mut self) {
        let pages = self.page_count(self.row_count);
        if self.page + 1 < pages {
            self.page += 1;
            self.selected_row = 0;
        }
    }

    pub fn prev_page(&mut self) {
        if self.page > 0 {
            self.page -= 1;
            self.selected_row = 0;
        }
    }

    /// Move to the next larger or smaller page size and return to page one.
    pub fn step_rows_per_page(&mut self, larger: bool) {
        self.set_rows_per_page(step_page_size(self.rows_per_page(), larger));
    }

    /// Set the page size. Sizes that are not offered are ignored.
    pub fn set_rows_per_page(&mut self, rows_per_page: usize) {
        if !is_valid_page_size(rows_per_page) || rows_per_page == self.rows_per_page() {
            return;
        }
        self.options.rows_per_page = rows_per_page;
        self.page = 0;
        self.selected_row = 0;
        debug!(rows_per_page, "Page size changed");
    }

    /// Route a click on the cell at page `position` and `column`.
    ///
    /// The record is looked up by the row's data index. Returns the kind of
    /// the routed dialog, or None when there is no row at `position`.
    pub fn open_detail_at(&mut self, position: usize, column: usize) -> Option<DetailKind> {
        let rows = self.visible_rows();
        let data_index = self.page_rows(&rows).get(position)?.data_index;
        let record = self.records().get(data_index)?;

        let target = route(column, record);
        let kind = target.kind();
        debug!(data_index, column, ?kind, "Opening detail");
        self.details.open(target);
        Some(kind)
    }

    /// Same as clicking the selected cell.
    pub fn open_selected_detail(&mut self) -> Option<DetailKind> {
        self.open_detail_at(self.selected_row, self.selected_column)
    }

    /// Close the top-most dialog. Returns false if none was open.
    pub fn close_top_detail(&mut self) -> bool {
        self.details.close_top_most().is_some()
    }

    /// Sorting never changes the count, so the rows are filtered unsorted.
    fn recount(&mut self) {
        self.row_count = build_rows(self.records(), self.search.filter_text(), None).len();
    }

    /// Keep page and selection within the current rows.
    fn clamp(&mut self) {
        let last_page = self.page_count(self.row_count) - 1;
        self.page = self.page.min(last_page);
        self.selected_row = self.selected_row.min(self.page_len().saturating_sub(1));
        self.selected_column = self.selected_column.min(COLUMN_COUNT - 1);
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
