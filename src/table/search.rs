//! Row search predicate.
//!
//! Matching is case-sensitive substring containment. Each cell is tested by,
//! in priority order: the column's custom matcher; text containment for text
//! cells; "any string element contains" for string lists. User lists without
//! a custom matcher never match. A row is visible if any cell matches.

use crate::table::cell::{CellValue, DisplayRow};
use crate::table::schema::ColumnSchema;

/// Whether `row` is visible for `query`.
///
/// The empty query matches every row that has at least one string cell,
/// since every string contains the empty string.
pub fn matches(query: &str, row: &DisplayRow, schema: &ColumnSchema) -> bool {
    row.cells()
        .iter()
        .zip(schema.iter())
        .any(|(cell, column)| match column.search {
            Some(matcher) => matcher(query, cell),
            None => cell_contains(query, cell),
        })
}

/// Default cell matcher.
pub fn cell_contains(query: &str, cell: &CellValue) -> bool {
    match cell {
        CellValue::Text(text) => text.contains(query),
        CellValue::StringList(values) => values
            .iter()
            .flatten()
            .any(|value| value.contains(query)),
        CellValue::UserList(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClassroomRecord, Team, User};
    use crate::table::projector::project;
    use crate::table::schema::COLUMNS;

    fn record_with_users(users: Vec<User>) -> ClassroomRecord {
        ClassroomRecord {
            classroom_name: Some("Pekárna".to_string()),
            team: Some(Team {
                users: Some(users),
                ..Team::default()
            }),
            ..ClassroomRecord::default()
        }
    }

    fn user(first: &str, last: &str, activated: bool, email: &str, region: Option<&str>) -> User {
        User {
            firstname: Some(first.to_string()),
            lastname: Some(last.to_string()),
            activated: Some(activated),
            email: Some(email.to_string()),
            region: region.map(str::to_string),
            ..User::default()
        }
    }

    #[test]
    fn matches_text_cell_substring() {
        let row = project(&record_with_users(vec![]));
        assert!(matches("kárn", &row, &COLUMNS));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let row = project(&record_with_users(vec![]));
        assert!(!matches("pekárna", &row, &COLUMNS));
    }

    #[test]
    fn empty_query_matches_any_projected_row() {
        let row = project(&ClassroomRecord::default());
        assert!(matches("", &row, &COLUMNS));
    }

    #[test]
    fn team_matches_activated_user_by_name() {
        let row = project(&record_with_users(vec![user(
            "Ana", "K", true, "ana@x.cz", None,
        )]));
        assert!(matches("Ana", &row, &COLUMNS));
    }

    #[test]
    fn deactivated_user_matches_only_on_email() {
        let row = project(&record_with_users(vec![user(
            "Ana", "K", false, "x@y.cz", None,
        )]));
        assert!(!matches("Ana", &row, &COLUMNS));
        assert!(matches("x@y", &row, &COLUMNS));
    }

    #[test]
    fn region_list_matches_string_elements() {
        let row = project(&record_with_users(vec![
            user("A", "B", true, "a@b.cz", None),
            user("C", "D", true, "c@d.cz", Some("Olomouc")),
        ]));
        assert!(matches("lomo", &row, &COLUMNS));
    }

    #[test]
    fn missing_region_elements_never_match() {
        assert!(!cell_contains("", &CellValue::StringList(vec![None])));
    }

    #[test]
    fn user_list_without_custom_matcher_never_matches() {
        let cell = CellValue::UserList(vec![user("Ana", "K", true, "a@b.cz", None)]);
        assert!(!cell_contains("Ana", &cell));
    }

    #[test]
    fn no_cell_matching_hides_row() {
        let row = project(&record_with_users(vec![user(
            "Ana", "K", true, "ana@x.cz", Some("Brno"),
        )]));
        assert!(!matches("Ostrava", &row, &COLUMNS));
    }
}
