//! Search input widget for rendering the search bar.

use crate::state::SearchState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search input widget.
///
/// Renders an editable bar with a block cursor while typing, and a
/// read-only bar once the query is submitted.
pub struct SearchInput<'a> {
    search_state: &'a SearchState,
}

impl<'a> SearchInput<'a> {
    pub fn new(search_state: &'a SearchState) -> Self {
        Self { search_state }
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.search_state {
            SearchState::Typing { query, cursor } => {
                // Cursor is a char index
                let before: String = query.chars().take(*cursor).collect();
                let mut after = query.chars().skip(*cursor);
                let cursor_char = after.next().map_or_else(|| " ".to_string(), String::from);
                let after_text: String = after.collect();

                let line = Line::from(vec![
                    Span::raw(before),
                    Span::styled(
                        cursor_char,
                        Style::default()
                            .bg(Color::White)
                            .fg(Color::Black)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(after_text),
                ]);

                Paragraph::new(line)
                    .block(Block::default().borders(Borders::ALL).title(" Hledat "))
                    .render(area, buf);
            }
            SearchState::Active { query } => {
                Paragraph::new(Line::from(query.as_str()))
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .title(" Hledat (Esc: zrušit) "),
                    )
                    .render(area, buf);
            }
            SearchState::Inactive => {}
        }
    }
}
