//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by category.
//! Triggered by '?' key, dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::helpers::{centered_rect, empty_line};
use super::styles::TableStyles;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Shortcut groups: category title, then (keys, description) pairs.
const SHORTCUTS: &[(&str, &[(&str, &str)])] = &[
    (
        "Tabulka",
        &[
            ("j/↓ k/↑", "Další / předchozí řádek"),
            ("h/← l/→", "Další / předchozí sloupec"),
            ("g/Home G/End", "První / poslední řádek stránky"),
            ("Enter", "Otevřít detail buňky"),
            ("s", "Řadit podle sloupce (znovu: obrátit)"),
            ("klik", "Hlavička řadí, buňka otevírá detail"),
        ],
    ),
    (
        "Stránkování",
        &[
            ("] / PgDn", "Další stránka"),
            ("[ / PgUp", "Předchozí stránka"),
            ("+ / -", "Více / méně řádků na stránku"),
        ],
    ),
    (
        "Hledání",
        &[
            ("/ Ctrl+f", "Začít hledat"),
            ("Enter", "Ponechat dotaz"),
            ("Esc", "Zrušit hledání"),
        ],
    ),
    (
        "Aplikace",
        &[
            ("Esc", "Zavřít horní dialog"),
            ("?", "Nápověda"),
            ("q Ctrl+c", "Konec"),
        ],
    ),
];

/// Width of the key column in the overlay.
const KEY_COLUMN_WIDTH: usize = 16;

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, styles: &TableStyles) {
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, frame.area());

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(styles))
        .block(
            Block::default()
                .title(" Klávesové zkratky ")
                .borders(Borders::ALL)
                .border_style(styles.dialog_border),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    // Dismissal hint on the bottom border
    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };
    let hint = Paragraph::new(Line::from(Span::styled(
        " Esc nebo ? zavře nápovědu ",
        styles.muted.add_modifier(Modifier::DIM),
    )))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Build the help content lines grouped by category.
fn build_help_content(styles: &TableStyles) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (index, (category, shortcuts)) in SHORTCUTS.iter().enumerate() {
        if index > 0 {
            lines.push(empty_line());
        }
        lines.push(Line::from(Span::styled(*category, styles.section)));
        for (keys, description) in shortcuts.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {keys:<width$}", width = KEY_COLUMN_WIDTH), styles.label),
                Span::raw(*description),
            ]));
        }
    }
    lines
}

// ===== Tests =====

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
