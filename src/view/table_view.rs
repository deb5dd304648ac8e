//! Classroom table rendering.
//!
//! Cells are placed by hand rather than through ratatui's `Table` so the
//! geometry handed to mouse hit-testing is exactly what was drawn.

use super::constants::{
    COLUMN_SPACING, HEADER_HEIGHT, MAX_COLUMN_WIDTH, MIN_COLUMN_WIDTH, SORT_ARROW_WIDTH,
};
use super::styles::TableStyles;
use crate::state::{AppState, ColumnSpan, RowSpan, TableGeometry};
use crate::table::schema::CellRender;
use crate::table::{CellValue, DisplayRow, SortSpec, TableRow, COLUMNS, COLUMN_COUNT};
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Paragraph, Widget},
    Frame,
};
use std::ops::Range;
use unicode_width::UnicodeWidthStr;

/// Shown in place of the body when the search matches nothing.
pub const NO_MATCHES: &str = "Žádné odpovídající záznamy";

/// Header text of `column`, with the arrow of the active sort.
pub fn header_label(column: usize, sort: Option<SortSpec>) -> String {
    let label = COLUMNS.get(column).map_or("", |c| c.label);
    match sort {
        Some(spec) if spec.column == column => format!("{label} {}", spec.direction.arrow()),
        _ => label.to_string(),
    }
}

/// Width of every column, fitted to the header and the given rows.
pub fn column_widths(rows: &[TableRow]) -> [u16; COLUMN_COUNT] {
    std::array::from_fn(|column| {
        let header = COLUMNS.get(column).map_or(0, |c| c.label.width());
        let widest_cell = rows
            .iter()
            .filter_map(|table_row| table_row.row.cell(column))
            .flat_map(CellValue::display_lines)
            .map(|line| line.width())
            .max()
            .unwrap_or(0);

        let wanted = u16::try_from(widest_cell.max(header + usize::from(SORT_ARROW_WIDTH)))
            .unwrap_or(MAX_COLUMN_WIDTH);
        wanted.clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH)
    })
}

/// Lines a row needs: list cells take one line per entry.
pub fn row_height(row: &DisplayRow) -> u16 {
    COLUMNS
        .iter()
        .zip(row.cells())
        .filter(|(column, _)| column.render == CellRender::Lines)
        .map(|(_, cell)| cell.display_lines().len())
        .max()
        .map_or(1, |lines| u16::try_from(lines).unwrap_or(u16::MAX).max(1))
}

/// Items (columns or rows) to draw so that `focus` is visible.
///
/// Starts at the first item when everything up to `focus` fits, otherwise as
/// late as needed to put `focus` at the far edge. Then extends past `focus`
/// while space remains. `focus` itself is always included, even when it is
/// larger than `available`.
pub fn visible_window(sizes: &[u16], focus: usize, available: u16, gap: u16) -> Range<usize> {
    let Some(last) = sizes.len().checked_sub(1) else {
        return 0..0;
    };
    let focus = focus.min(last);
    let available = u32::from(available);
    let gap = u32::from(gap);

    let mut start = focus;
    let mut used = u32::from(sizes[focus]);
    while start > 0 {
        let next = used + gap + u32::from(sizes[start - 1]);
        if next > available {
            break;
        }
        used = next;
        start -= 1;
    }

    let mut end = focus + 1;
    while end < sizes.len() {
        let next = used + gap + u32::from(sizes[end]);
        if next > available {
            break;
        }
        used = next;
        end += 1;
    }

    start..end
}

/// Render the header and the current page of rows into `area`.
///
/// Returns where every visible column and row ended up.
pub fn render_table(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    page_rows: &[TableRow],
    styles: &TableStyles,
) -> TableGeometry {
    let widths = column_widths(page_rows);
    let mut columns = Vec::new();
    let mut x = area.x;
    for column in visible_window(&widths, state.selected_column(), area.width, COLUMN_SPACING) {
        let width = widths[column].min(area.right().saturating_sub(x));
        if width == 0 {
            break;
        }
        columns.push(ColumnSpan { column, x, width });
        x = x.saturating_add(width).saturating_add(COLUMN_SPACING);
    }

    let header = Rect {
        height: HEADER_HEIGHT.min(area.height),
        ..area
    };
    let body = Rect {
        y: area.y + header.height,
        height: area.height - header.height,
        ..area
    };

    let heights: Vec<u16> = page_rows.iter().map(|r| row_height(&r.row)).collect();
    let mut rows = Vec::new();
    let mut y = body.y;
    for position in visible_window(&heights, state.selected_row(), body.height, 0) {
        let height = heights[position].min(body.bottom().saturating_sub(y));
        if height == 0 {
            break;
        }
        rows.push(RowSpan { position, y, height });
        y += height;
    }

    let sort = state.sort();
    let buf = frame.buffer_mut();

    for span in &columns {
        let style = if sort.is_some_and(|spec| spec.column == span.column) {
            styles.sorted_header
        } else {
            styles.header
        };
        Paragraph::new(header_label(span.column, sort))
            .style(style)
            .render(Rect::new(span.x, header.y, span.width, header.height), buf);
    }

    if page_rows.is_empty() && body.height > 0 {
        Paragraph::new(NO_MATCHES)
            .style(styles.muted)
            .render(Rect { height: 1, ..body }, buf);
    }

    for row_span in &rows {
        let Some(table_row) = page_rows.get(row_span.position) else {
            continue;
        };
        let selected = row_span.position == state.selected_row();
        if selected {
            buf.set_style(
                Rect::new(area.x, row_span.y, area.width, row_span.height),
                styles.selected_row,
            );
        }

        for span in &columns {
            let lines: Vec<Line> = table_row
                .row
                .cell(span.column)
                .map(CellValue::display_lines)
                .unwrap_or_default()
                .into_iter()
                .map(Line::from)
                .collect();
            let mut cell = Paragraph::new(lines);
            if selected && span.column == state.selected_column() {
                cell = cell.style(styles.selected_cell);
            }
            cell.render(
                Rect::new(span.x, row_span.y, span.width, row_span.height),
                buf,
            );
        }
    }

    TableGeometry {
        header,
        columns,
        rows,
    }
}

#[cfg(test)]
#[path = "table_view_tests.rs"]
mod tests;
