//! Opaque record identifiers.
//!
//! The data API hands out ids as JSON strings or numbers depending on the
//! backing table. Both are normalized to their string form at the boundary.

use serde::Deserialize;
use std::fmt;

/// Opaque identifier of a classroom, team, user, phase or toolbox order.
///
/// Smart constructor rejects empty ids; deserialization accepts strings and
/// integers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "RawId")]
pub struct RecordId(String);

impl RecordId {
    /// Smart constructor: validates non-empty id.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidRecordId> {
        let raw = raw.into();
        if raw.is_empty() {
            Err(InvalidRecordId::Empty)
        } else {
            Ok(Self(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Wire form of an id before normalization.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

impl TryFrom<RawId> for RecordId {
    type Error = InvalidRecordId;

    fn try_from(raw: RawId) -> Result<Self, Self::Error> {
        match raw {
            RawId::Text(s) => RecordId::new(s),
            RawId::Signed(n) => RecordId::new(n.to_string()),
            RawId::Unsigned(n) => RecordId::new(n.to_string()),
        }
    }
}

// ===== Error Types =====

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidRecordId {
    #[error("Record ID cannot be empty")]
    Empty,
}

// ===== Tests =====
