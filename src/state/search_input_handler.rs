//! Search input handling (pure state transitions).
//!
//! Handles text input for the SearchState::Typing variant.
//! The cursor is a character index, so multi-byte input (á, č, ř) edits
//! whole characters.

use crate::state::{SearchQuery, SearchState};

/// Byte offset of the `cursor`-th character of `query`.
fn byte_offset(query: &str, cursor: usize) -> usize {
    query
        .char_indices()
        .nth(cursor)
        .map_or(query.len(), |(offset, _)| offset)
}

/// Handle character input when in Typing state.
/// Inserts the character at cursor position and advances cursor.
///
/// Returns updated SearchState. No-op if not in Typing state.
pub fn handle_char_input(state: SearchState, ch: char) -> SearchState {
    match state {
        SearchState::Typing { mut query, cursor } => {
            query.insert(byte_offset(&query, cursor), ch);
            SearchState::Typing {
                query,
                cursor: cursor + 1,
            }
        }
        other => other,
    }
}

/// Handle backspace when in Typing state.
/// Deletes the character before the cursor, if any.
pub fn handle_backspace(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { mut query, cursor } if cursor > 0 => {
            query.remove(byte_offset(&query, cursor - 1));
            SearchState::Typing {
                query,
                cursor: cursor - 1,
            }
        }
        other => other,
    }
}

/// Move cursor left by one character. Saturates at 0.
pub fn handle_cursor_left(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { query, cursor } => SearchState::Typing {
            query,
            cursor: cursor.saturating_sub(1),
        },
        other => other,
    }
}

/// Move cursor right by one character. Saturates at the query length.
pub fn handle_cursor_right(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { query, cursor } => {
            let max_cursor = query.chars().count();
            SearchState::Typing {
                query,
                cursor: (cursor + 1).min(max_cursor),
            }
        }
        other => other,
    }
}

/// Enter search input mode.
///
/// From Inactive, starts with an empty query. From Active, reopens the
/// submitted query for editing with the cursor at its end.
pub fn activate_search_input(state: SearchState) -> SearchState {
    match state {
        SearchState::Inactive => SearchState::Typing {
            query: String::new(),
            cursor: 0,
        },
        SearchState::Active { query } => {
            let query = query.as_str().to_string();
            let cursor = query.chars().count();
            SearchState::Typing { query, cursor }
        }
        typing @ SearchState::Typing { .. } => typing,
    }
}

/// Clear the search. Always returns Inactive.
pub fn cancel_search(_state: SearchState) -> SearchState {
    SearchState::Inactive
}

/// Submit the typed query.
/// Non-empty queries become Active; an empty query clears the search.
///
/// No-op if not in Typing state.
pub fn submit_search(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { query, .. } => match SearchQuery::new(query) {
            Some(query) => SearchState::Active { query },
            None => SearchState::Inactive,
        },
        other => other,
    }
}

#[cfg(test)]
#[path = "search_input_handler_tests.rs"]
mod tests;
