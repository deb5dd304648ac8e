//! Result of the classroom query as seen by the table.
//!
//! The fetch itself belongs to the data collaborator. The table only ever
//! observes one of three states per render.

use crate::model::ClassroomRecord;

/// Tri-state query result: still loading, failed, or delivered records.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum QueryResult {
    /// The collaborator has not answered yet.
    #[default]
    Loading,
    /// The fetch failed. The message is for logs only; users see a fixed banner.
    Error { message: String },
    /// Records in the order the API returned them.
    Data(Vec<ClassroomRecord>),
}

impl QueryResult {
    pub fn is_loading(&self) -> bool {
        matches!(self, QueryResult::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, QueryResult::Error { .. })
    }

    /// Delivered records, or an empty slice while loading or after an error.
    pub fn classrooms(&self) -> &[ClassroomRecord] {
        match self {
            QueryResult::Data(records) => records,
            QueryResult::Loading | QueryResult::Error { .. } => &[],
        }
    }
}

/// Which list of the API response feeds the table.
///
/// The overview screen reads `classrooms`; the per-region screen reads
/// `regionClassrooms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataSelector {
    #[default]
    Classrooms,
    RegionClassrooms,
}

impl DataSelector {
    /// JSON key of the selected list.
    pub fn key(self) -> &'static str {
        match self {
            DataSelector::Classrooms => "classrooms",
            DataSelector::RegionClassrooms => "regionClassrooms",
        }
    }
}
