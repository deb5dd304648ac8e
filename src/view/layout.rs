//! Screen layout.
//!
//! Title, search bar (while searching), the table or its loading/error
//! state, and the status bar. Dialogs and the help overlay are drawn on top.

use super::constants::{SEARCH_INPUT_HEIGHT, SPINNER_FRAMES, STATUS_BAR_HEIGHT, TITLE_HEIGHT};
use super::detail_modal::render_detail_dialogs;
use super::help::render_help_overlay;
use super::search_input::SearchInput;
use super::styles::TableStyles;
use super::table_view::{header_label, render_table};
use crate::model::QueryResult;
use crate::state::{AppState, SearchState, TableGeometry};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// Banner shown instead of the table when the fetch failed.
pub const LOAD_FAILED: &str = "Načtení se nezdařilo";

/// Text next to the spinner while the records load.
pub const LOADING: &str = "Načítání…";

/// Areas of the last frame that mouse handling needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedLayout {
    /// Table geometry, absent while loading or after an error.
    pub table: Option<TableGeometry>,
    /// Open dialogs, bottom first.
    pub dialogs: Vec<Rect>,
}

/// Render the whole screen.
pub fn render_layout(
    frame: &mut Frame,
    state: &AppState,
    styles: &TableStyles,
    spinner_tick: usize,
) -> RenderedLayout {
    let search_height = if matches!(state.search(), SearchState::Inactive) {
        0
    } else {
        SEARCH_INPUT_HEIGHT
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Length(search_height),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    frame.render_widget(
        Paragraph::new(Line::from(state.title.as_str())).style(styles.title),
        chunks[0],
    );

    if search_height > 0 {
        frame.render_widget(SearchInput::new(state.search()), chunks[1]);
    }

    let rows = state.visible_rows();
    let table = match state.query() {
        QueryResult::Loading => {
            let frame_symbol = SPINNER_FRAMES[spinner_tick % SPINNER_FRAMES.len()];
            frame.render_widget(
                Paragraph::new(format!("{frame_symbol} {LOADING}")).style(styles.muted),
                chunks[2],
            );
            None
        }
        QueryResult::Error { .. } => {
            let banner = Rect {
                height: chunks[2].height.min(1),
                ..chunks[2]
            };
            frame.render_widget(
                Paragraph::new(format!(" {LOAD_FAILED}")).style(styles.error_banner),
                banner,
            );
            None
        }
        QueryResult::Data(_) => Some(render_table(
            frame,
            chunks[2],
            state,
            state.page_rows(&rows),
            styles,
        )),
    };

    frame.render_widget(
        Paragraph::new(status_text(state, rows.len())).style(styles.muted),
        chunks[3],
    );

    let dialogs = render_detail_dialogs(frame, &state.details, styles);

    if state.help_visible {
        render_help_overlay(frame, styles);
    }

    RenderedLayout { table, dialogs }
}

/// Status bar text: visible range, page, page size and sort.
pub fn status_text(state: &AppState, row_count: usize) -> String {
    let first = state.page() * state.rows_per_page();
    let range = if row_count == 0 {
        "0".to_string()
    } else {
        format!(
            "{}-{}",
            first + 1,
            (first + state.rows_per_page()).min(row_count)
        )
    };
    let sort = state
        .sort()
        .map(|spec| format!(" | Řazení: {}", header_label(spec.column, Some(spec))))
        .unwrap_or_default();

    format!(
        "{range} z {row_count} | Strana {}/{} | Řádků na stránku: {}{sort} | ?: nápověda",
        state.page() + 1,
        state.page_count(row_count),
        state.rows_per_page(),
    )
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
