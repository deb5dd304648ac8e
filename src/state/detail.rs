//! Open detail dialogs.
//!
//! One independent slot per dialog kind. Opening a dialog never closes
//! another one, so several dialogs can be stacked at once.

use crate::model::{ClassroomRecord, Team, ToolboxOrder};
use crate::table::{DetailKind, DetailTarget};

/// Drawing order of the dialogs, bottom first.
pub const STACKING_ORDER: [DetailKind; 5] = [
    DetailKind::Branch,
    DetailKind::School,
    DetailKind::Project,
    DetailKind::Team,
    DetailKind::Toolbox,
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailSlots {
    project: Option<ClassroomRecord>,
    team: Option<Team>,
    branch: Option<ClassroomRecord>,
    school: Option<ClassroomRecord>,
    toolbox: Option<ToolboxOrder>,
}

impl DetailSlots {
    /// Store a routed payload in its slot.
    ///
    /// Team and Toolbox payloads are stored as given: an absent payload
    /// empties the slot.
    pub fn open(&mut self, target: DetailTarget) {
        match target {
            DetailTarget::Project(record) => self.project = Some(record),
            DetailTarget::Team(team) => self.team = team,
            DetailTarget::Branch(record) => self.branch = Some(record),
            DetailTarget::School(record) => self.school = Some(record),
            DetailTarget::Toolbox(order) => self.toolbox = order,
        }
    }

    pub fn close(&mut self, kind: DetailKind) {
        match kind {
            DetailKind::Project => self.project = None,
            DetailKind::Team => self.team = None,
            DetailKind::Branch => self.branch = None,
            DetailKind::School => self.school = None,
            DetailKind::Toolbox => self.toolbox = None,
        }
    }

    pub fn is_open(&self, kind: DetailKind) -> bool {
        match kind {
            DetailKind::Project => self.project.is_some(),
            DetailKind::Team => self.team.is_some(),
            DetailKind::Branch => self.branch.is_some(),
            DetailKind::School => self.school.is_some(),
            DetailKind::Toolbox => self.toolbox.is_some(),
        }
    }

    pub fn any_open(&self) -> bool {
        STACKING_ORDER.iter().any(|&kind| self.is_open(kind))
    }

    /// Open dialogs, bottom first.
    pub fn open_kinds(&self) -> Vec<DetailKind> {
        STACKING_ORDER
            .into_iter()
            .filter(|&kind| self.is_open(kind))
            .collect()
    }

    /// The dialog drawn on top, if any.
    pub fn top_most(&self) -> Option<DetailKind> {
        STACKING_ORDER
            .into_iter()
            .rev()
            .find(|&kind| self.is_open(kind))
    }

    /// Close the top-most dialog and report which one it was.
    pub fn close_top_most(&mut self) -> Option<DetailKind> {
        let kind = self.top_most()?;
        self.close(kind);
        Some(kind)
    }

    pub fn project(&self) -> Option<&ClassroomRecord> {
        self.project.as_ref()
    }

    pub fn team(&self) -> Option<&Team> {
        self.team.as_ref()
    }

    pub fn branch(&self) -> Option<&ClassroomRecord> {
        self.branch.as_ref()
    }

    pub fn school(&self) -> Option<&ClassroomRecord> {
        self.school.as_ref()
    }

    pub fn toolbox(&self) -> Option<&ToolboxOrder> {
        self.toolbox.as_ref()
    }
}
