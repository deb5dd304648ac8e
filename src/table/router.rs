//! Click routing: which detail dialog a body cell opens.

use crate::model::{ClassroomRecord, Team, ToolboxOrder};
use crate::table::schema::{BRANCH, REGION, SCHOOL, TEAM, TOOLBOX};

/// The five detail dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetailKind {
    Project,
    Team,
    Branch,
    School,
    Toolbox,
}

/// A routed click: the dialog to open and the data it shows.
///
/// Team and Toolbox carry the nested value as-is, so a record without a team
/// or toolbox order routes to an empty payload.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailTarget {
    Project(ClassroomRecord),
    Team(Option<Team>),
    Branch(ClassroomRecord),
    School(ClassroomRecord),
    Toolbox(Option<ToolboxOrder>),
}

impl DetailTarget {
    pub fn kind(&self) -> DetailKind {
        match self {
            DetailTarget::Project(_) => DetailKind::Project,
            DetailTarget::Team(_) => DetailKind::Team,
            DetailTarget::Branch(_) => DetailKind::Branch,
            DetailTarget::School(_) => DetailKind::School,
            DetailTarget::Toolbox(_) => DetailKind::Toolbox,
        }
    }
}

/// Columns that open something other than the project dialog.
static ROUTES: [(usize, DetailKind); 5] = [
    (TEAM, DetailKind::Team),
    (REGION, DetailKind::Team),
    (BRANCH, DetailKind::Branch),
    (SCHOOL, DetailKind::School),
    (TOOLBOX, DetailKind::Toolbox),
];

/// Every column not listed in the route table opens the project dialog.
const DEFAULT_ROUTE: DetailKind = DetailKind::Project;

/// Dialog kind for a click on `column`.
pub fn route_kind(column: usize) -> DetailKind {
    ROUTES
        .iter()
        .find(|(routed, _)| *routed == column)
        .map_or(DEFAULT_ROUTE, |(_, kind)| *kind)
}

/// Route a click on `column` of the row showing `record`.
pub fn route(column: usize, record: &ClassroomRecord) -> DetailTarget {
    match route_kind(column) {
        DetailKind::Project => DetailTarget::Project(record.clone()),
        DetailKind::Team => DetailTarget::Team(record.team.clone()),
        DetailKind::Branch => DetailTarget::Branch(record.clone()),
        DetailKind::School => DetailTarget::School(record.clone()),
        DetailKind::Toolbox => DetailTarget::Toolbox(record.toolbox_order.clone()),
    }
}
