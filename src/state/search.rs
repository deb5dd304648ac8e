//! Search state machine.
//!
//! SearchState is a sum type representing the three possible search states:
//! - Inactive: no query, every row is shown
//! - Typing: user is editing the query; the table filters live
//! - Active: query submitted and kept while the user works with the table

// ===== SearchState =====

/// Search state machine.
/// Sum type enforces exactly one state at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchState {
    /// No active search.
    #[default]
    Inactive,
    /// User is typing. `cursor` counts characters, not bytes.
    Typing { query: String, cursor: usize },
    /// Search submitted.
    Active { query: SearchQuery },
}

impl SearchState {
    /// Query the table should be filtered by, if any.
    ///
    /// An empty query while typing filters nothing.
    pub fn filter_text(&self) -> Option<&str> {
        match self {
            SearchState::Inactive => None,
            SearchState::Typing { query, .. } if query.is_empty() => None,
            SearchState::Typing { query, .. } => Some(query),
            SearchState::Active { query } => Some(query.as_str()),
        }
    }

    pub fn is_typing(&self) -> bool {
        matches!(self, SearchState::Typing { .. })
    }
}

// ===== SearchQuery =====

/// Submitted search query. Never empty.
///
/// Whitespace is significant: the table search is plain substring matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Returns None if the query is empty.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let s = raw.into();
        if s.is_empty() {
            None
        } else {
            Some(Self(s))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
