//! Classroom project records as delivered by the data API.
//!
//! These types mirror the GraphQL selection the table is fed with. Every
//! field other than structure is optional: the API omits or nulls fields
//! freely and the table treats missing data as a display state, not an error.
//! A field of the wrong type decodes as `None` too.

use crate::model::lenient::lenient;
use crate::model::{RecordId, Scalar};
use chrono::{DateTime, NaiveDate};
use serde::Deserialize;

/// One classroom project.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClassroomRecord {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<RecordId>,
    #[serde(deserialize_with = "lenient")]
    pub classroom_name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub team: Option<Team>,
    #[serde(deserialize_with = "lenient")]
    pub phases: Option<Vec<Phase>>,

    #[serde(deserialize_with = "lenient")]
    pub school_address: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub director_name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub director_email: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub director_phone: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub teacher_name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub teacher_phone: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub teacher_email: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub school_meeting: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub semester: Option<Scalar>,

    #[serde(deserialize_with = "lenient")]
    pub branch_address: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub branch_representative_email: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub branch_representative_phone: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub branch_representative_name: Option<String>,

    #[serde(deserialize_with = "lenient")]
    pub toolbox_order: Option<ToolboxOrder>,

    #[serde(deserialize_with = "lenient")]
    pub company_name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub business_purpose: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub business_description: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub money_goal_amount: Option<Scalar>,
}

impl ClassroomRecord {
    /// The phase the classroom is currently working on.
    ///
    /// This is the first phase in list order that is not finished. `None`
    /// means the project is complete (or has no phases at all).
    pub fn active_phase(&self) -> Option<&Phase> {
        self.phases
            .as_deref()
            .unwrap_or_default()
            .iter()
            .find(|phase| !phase.is_finished())
    }

    /// Total number of phases in the workflow.
    pub fn phase_count(&self) -> usize {
        self.phases.as_ref().map_or(0, Vec::len)
    }

    /// Users of the owning team, empty when there is no team.
    pub fn team_users(&self) -> &[User] {
        self.team
            .as_ref()
            .and_then(|team| team.users.as_deref())
            .unwrap_or_default()
    }
}

/// The pupils and mentors working on a classroom project.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Team {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<RecordId>,
    #[serde(deserialize_with = "lenient")]
    pub users: Option<Vec<User>>,
}

/// A team member.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<RecordId>,
    #[serde(deserialize_with = "lenient")]
    pub firstname: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub lastname: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub activated: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub region: Option<String>,
}

impl User {
    pub fn is_activated(&self) -> bool {
        self.activated.unwrap_or(false)
    }

    /// Name shown in the table.
    ///
    /// Activated users show `"{firstname} {lastname}"`; users who have not
    /// activated their account yet are only known by their email.
    pub fn display_name(&self) -> String {
        if self.is_activated() {
            format!(
                "{} {}",
                self.firstname.as_deref().unwrap_or_default(),
                self.lastname.as_deref().unwrap_or_default()
            )
        } else {
            self.email.clone().unwrap_or_default()
        }
    }
}

/// A step of the fixed project workflow.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Phase {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<RecordId>,
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub finished: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub finish_date: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub number: Option<i64>,
}

impl Phase {
    pub fn is_finished(&self) -> bool {
        self.finished.unwrap_or(false)
    }

    /// Finish date formatted as `d.m.yyyy`.
    ///
    /// Accepts RFC 3339 timestamps and plain `yyyy-mm-dd` dates; anything
    /// else is returned verbatim.
    pub fn finish_date_display(&self) -> Option<String> {
        let raw = self.finish_date.as_deref()?;
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
            return Some(timestamp.format("%-d.%-m.%Y").to_string());
        }
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Some(date.format("%-d.%-m.%Y").to_string());
        }
        Some(raw.to_string())
    }
}

/// Order for the classroom's starter toolbox.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToolboxOrder {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<RecordId>,
    #[serde(deserialize_with = "lenient")]
    pub state: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub recipient: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub address: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub children_count: Option<i64>,
}
