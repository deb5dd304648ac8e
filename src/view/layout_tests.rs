//! Tests for screen layout rendering.

use super::*;
use crate::model::{ClassroomRecord, Scalar};
use crate::state::SearchQuery;
use crate::table::schema::{EARNINGS, PROJECT, TOOLBOX};
use crate::table::TableOptions;
use crate::view::styles::ColorConfig;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

// ===== Test Helpers =====

fn record(name: &str, earnings: i64) -> ClassroomRecord {
    ClassroomRecord {
        classroom_name: Some(name.to_string()),
        money_goal_amount: Some(Scalar::from(earnings)),
        ..ClassroomRecord::default()
    }
}

fn state_with(query: QueryResult) -> AppState {
    let mut state = AppState::new("Projekty", TableOptions::default());
    state.set_query(query);
    state
}

fn render(state: &AppState, spinner_tick: usize) -> (RenderedLayout, String) {
    let styles = TableStyles::with_color_config(ColorConfig::from_env_and_args(true));
    let mut terminal = Terminal::new(TestBackend::new(200, 30)).unwrap();
    let mut rendered = RenderedLayout::default();
    terminal
        .draw(|frame| rendered = render_layout(frame, state, &styles, spinner_tick))
        .unwrap();
    let text = terminal
        .backend()
        .buffer()
        .content()
        .chunks(200)
        .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n");
    (rendered, text)
}

// ===== Query states =====

#[test]
fn loading_shows_spinner_and_no_table() {
    let state = state_with(QueryResult::Loading);
    let (rendered, text) = render(&state, 1);

    assert!(rendered.table.is_none());
    assert!(text.contains(&format!("{} {LOADING}", SPINNER_FRAMES[1])));
    assert!(!text.contains("Projekt "), "no header while loading");
}

#[test]
fn spinner_wraps_around() {
    let state = state_with(QueryResult::Loading);
    let (_, text) = render(&state, SPINNER_FRAMES.len());
    assert!(text.contains(&format!("{} {LOADING}", SPINNER_FRAMES[0])));
}

#[test]
fn error_shows_fixed_banner_and_no_table() {
    let state = state_with(QueryResult::Error {
        message: "HTTP 500".to_string(),
    });
    let (rendered, text) = render(&state, 0);

    assert!(rendered.table.is_none());
    assert!(text.contains(LOAD_FAILED));
    assert!(!text.contains("HTTP 500"), "error details go to the log only");
}

#[test]
fn data_renders_title_table_and_status() {
    let state = state_with(QueryResult::Data(vec![record("Pekárna", 100)]));
    let (rendered, text) = render(&state, 0);

    let geometry = rendered.table.unwrap();
    assert_eq!(geometry.header.y, 1, "header sits right below the title");
    assert_eq!(geometry.rows.len(), 1);
    assert!(text.starts_with("Projekty"));
    assert!(text.contains("Pekárna"));
    assert!(text.contains("1-1 z 1 | Strana 1/1 | Řádků na stránku: 1000"));
}

#[test]
fn search_bar_pushes_table_down() {
    let mut state = state_with(QueryResult::Data(vec![record("Pekárna", 100)]));
    state.set_search(SearchState::Active {
        query: SearchQuery::new("Pek").unwrap(),
    });
    let (rendered, text) = render(&state, 0);

    let geometry = rendered.table.unwrap();
    assert_eq!(geometry.header.y, 1 + SEARCH_INPUT_HEIGHT);
    assert!(text.contains("Hledat"));
}

#[test]
fn open_dialogs_are_reported_for_hit_testing() {
    let mut state = state_with(QueryResult::Data(vec![record("Pekárna", 100)]));
    state.open_detail_at(0, PROJECT);
    let (rendered, text) = render(&state, 0);

    assert_eq!(rendered.dialogs.len(), 1);
    assert!(text.contains("Esc: zavřít"));
}

#[test]
fn toolbox_click_without_order_opens_nothing() {
    let mut state = state_with(QueryResult::Data(vec![record("Pekárna", 100)]));
    state.open_detail_at(0, TOOLBOX);
    let (rendered, _) = render(&state, 0);
    assert!(rendered.dialogs.is_empty());
}

#[test]
fn help_overlay_draws_over_table() {
    let mut state = state_with(QueryResult::Data(vec![record("Pekárna", 100)]));
    state.help_visible = true;
    let (_, text) = render(&state, 0);
    assert!(text.contains("Klávesové zkratky"));
}

// ===== Status text =====

#[test]
fn status_text_for_empty_table() {
    let state = state_with(QueryResult::Data(vec![]));
    assert_eq!(
        status_text(&state, 0),
        "0 z 0 | Strana 1/1 | Řádků na stránku: 1000 | ?: nápověda"
    );
}

#[test]
fn status_text_shows_second_page_and_sort() {
    let records = (0..25).map(|i| record(&format!("c{i}"), i)).collect();
    let mut state = state_with(QueryResult::Data(records));
    state.set_rows_per_page(10);
    state.next_page();
    state.toggle_sort(EARNINGS);
    state.toggle_sort(EARNINGS);

    assert_eq!(
        status_text(&state, 25),
        "11-20 z 25 | Strana 2/3 | Řádků na stránku: 10 | Řazení: Výdělek (Kč) ▼ | ?: nápověda"
    );
}
