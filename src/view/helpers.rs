//! Small building blocks shared by overlays.

use crate::table::PLACEHOLDER;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
};

/// An empty line, used as a spacer between sections.
pub fn empty_line() -> Line<'static> {
    Line::from("")
}

/// `"{label}: {value}"` with the label styled. Missing or empty values show
/// the placeholder.
pub fn key_value_line(label: &str, value: Option<&str>, label_style: Style) -> Line<'static> {
    let value = value.filter(|v| !v.is_empty()).unwrap_or(PLACEHOLDER);
    Line::from(vec![
        Span::styled(format!("{label}: "), label_style),
        Span::raw(value.to_string()),
    ])
}

/// A rect of the given percentage of `area`, centered in it.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = area.width * percent_x / 100;
    let height = area.height * percent_y / 100;

    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
