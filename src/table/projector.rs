//! Row projection: classroom record → display row.
//!
//! Projection never fails. Absent, empty or unreachable values render as the
//! `-` placeholder; the team renders as an empty list instead.

use crate::model::{ClassroomRecord, Scalar};
use crate::table::cell::{CellValue, DisplayRow, PLACEHOLDER};

/// Status text of a classroom with no unfinished phase.
pub const COMPLETED: &str = "Dokončeno";

/// Project one record into its twelve display cells.
pub fn project(record: &ClassroomRecord) -> DisplayRow {
    DisplayRow::new([
        text_or_placeholder(record.classroom_name.as_deref()),
        CellValue::UserList(record.team_users().to_vec()),
        CellValue::Text(status(record)),
        CellValue::StringList(
            record
                .team_users()
                .iter()
                .map(|user| user.region.clone())
                .collect(),
        ),
        text_or_placeholder(record.branch_address.as_deref()),
        text_or_placeholder(record.school_address.as_deref()),
        scalar_or_placeholder(record.semester.as_ref()),
        text_or_placeholder(
            record
                .toolbox_order
                .as_ref()
                .and_then(|order| order.state.as_deref()),
        ),
        text_or_placeholder(record.company_name.as_deref()),
        text_or_placeholder(record.business_description.as_deref()),
        text_or_placeholder(record.business_purpose.as_deref()),
        scalar_or_placeholder(record.money_goal_amount.as_ref()),
    ])
}

/// Progress text: `"{number}/{total}: {name}"` for the active phase, or
/// [`COMPLETED`].
///
/// Number and name are looked up independently; both lookups see the same
/// record because projection is synchronous.
pub fn status(record: &ClassroomRecord) -> String {
    if record.active_phase().is_none() {
        return COMPLETED.to_string();
    }
    let number = record
        .active_phase()
        .map_or_else(|| "1".to_string(), |phase| phase_number(record, phase));
    let name = record
        .active_phase()
        .and_then(|phase| phase.name.clone())
        .unwrap_or_else(|| PLACEHOLDER.to_string());
    format!("{number}/{}: {name}", record.phase_count())
}

/// Phase number, or its 1-based position when the API left it out.
fn phase_number(record: &ClassroomRecord, phase: &crate::model::Phase) -> String {
    match phase.number {
        Some(number) => number.to_string(),
        None => record
            .phases
            .as_deref()
            .unwrap_or_default()
            .iter()
            .position(|candidate| std::ptr::eq(candidate, phase))
            .map_or_else(|| "1".to_string(), |index| (index + 1).to_string()),
    }
}

fn text_or_placeholder(value: Option<&str>) -> CellValue {
    match value {
        Some(text) if !text.is_empty() => CellValue::Text(text.to_string()),
        _ => CellValue::from(PLACEHOLDER),
    }
}

fn scalar_or_placeholder(value: Option<&Scalar>) -> CellValue {
    value
        .and_then(Scalar::truthy_text)
        .map_or_else(|| CellValue::from(PLACEHOLDER), CellValue::Text)
}
