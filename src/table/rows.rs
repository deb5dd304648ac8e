//! The visible row set: project every record, filter by the query, sort.

use crate::model::ClassroomRecord;
use crate::table::cell::DisplayRow;
use crate::table::projector::project;
use crate::table::schema::COLUMNS;
use crate::table::search::matches;
use crate::table::sort::{sort_rows, SortSpec};
use std::borrow::Borrow;

/// A projected row together with the position of its record in the
/// unfiltered, unsorted record list.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub data_index: usize,
    pub row: DisplayRow,
}

impl Borrow<DisplayRow> for TableRow {
    fn borrow(&self) -> &DisplayRow {
        &self.row
    }
}

/// Rows to display, in display order.
///
/// `None` as query shows every row. Rows are projected fresh on every call.
pub fn build_rows(
    records: &[ClassroomRecord],
    query: Option<&str>,
    sort: Option<SortSpec>,
) -> Vec<TableRow> {
    let rows: Vec<TableRow> = records
        .iter()
        .enumerate()
        .map(|(data_index, record)| TableRow {
            data_index,
            row: project(record),
        })
        .filter(|row| query.map_or(true, |query| matches(query, &row.row, &COLUMNS)))
        .collect();

    match sort {
        Some(spec) => sort_rows(rows, spec.column, spec.direction),
        None => rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Scalar;
    use crate::table::schema::EARNINGS;
    use crate::table::sort::SortDirection;

    fn record(name: &str, earnings: i64) -> ClassroomRecord {
        ClassroomRecord {
            classroom_name: Some(name.to_string()),
            money_goal_amount: Some(Scalar::from(earnings)),
            ..ClassroomRecord::default()
        }
    }

    fn indices(rows: &[TableRow]) -> Vec<usize> {
        rows.iter().map(|r| r.data_index).collect()
    }

    #[test]
    fn no_query_no_sort_keeps_data_order() {
        let records = vec![record("a", 3), record("b", 1)];
        assert_eq!(indices(&build_rows(&records, None, None)), vec![0, 1]);
    }

    #[test]
    fn filter_then_sort_keeps_data_indices() {
        let records = vec![
            record("Pekárna", 300),
            record("Kavárna", 50),
            record("Pekárna II", 100),
        ];
        let rows = build_rows(
            &records,
            Some("Pek"),
            Some(SortSpec {
                column: EARNINGS,
                direction: SortDirection::Asc,
            }),
        );
        assert_eq!(indices(&rows), vec![2, 0]);
    }

    #[test]
    fn query_matching_nothing_yields_empty() {
        let records = vec![record("a", 1)];
        assert!(build_rows(&records, Some("zzz"), None).is_empty());
    }
}
