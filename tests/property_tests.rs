//! Property-based tests for the table engine.
//!
//! Tests validate:
//! 1. Projection always yields twelve cells and is deterministic
//! 2. Descending order is exactly the reverse of ascending order
//! 3. Filtering never invents rows and every kept row matches
//! 4. Page size stepping stays within the offered sizes

use classview::model::{ClassroomRecord, Phase, Scalar, Team, User};
use classview::table::options::{is_valid_page_size, step_page_size, ROWS_PER_PAGE_OPTIONS};
use classview::table::schema::is_sortable;
use classview::table::{
    build_rows, matches, project, sort_rows, SortDirection, SortSpec, COLUMNS, COLUMN_COUNT,
};
use proptest::prelude::*;

// ===== Generators =====

fn text() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[a-zA-Z0-9 .ěščřžýáíé-]{0,12}")
}

fn phase() -> impl Strategy<Value = Phase> {
    (text(), any::<bool>(), prop::option::of(1i64..10)).prop_map(|(name, finished, number)| {
        Phase {
            name,
            finished: Some(finished),
            number,
            ..Phase::default()
        }
    })
}

fn user() -> impl Strategy<Value = User> {
    (text(), text(), any::<bool>(), text(), text()).prop_map(
        |(firstname, lastname, activated, email, region)| User {
            firstname,
            lastname,
            activated: Some(activated),
            email,
            region,
            ..User::default()
        },
    )
}

fn record() -> impl Strategy<Value = ClassroomRecord> {
    (
        text(),
        text(),
        text(),
        prop::option::of(-5000i64..5000),
        prop::collection::vec(phase(), 0..4),
        prop::option::of(prop::collection::vec(user(), 0..3)),
    )
        .prop_map(
            |(classroom_name, company_name, branch_address, earnings, phases, users)| {
                ClassroomRecord {
                    classroom_name,
                    company_name,
                    branch_address,
                    money_goal_amount: earnings.map(Scalar::from),
                    phases: Some(phases),
                    team: users.map(|users| Team {
                        users: Some(users),
                        ..Team::default()
                    }),
                    ..ClassroomRecord::default()
                }
            },
        )
}

fn sortable_column() -> impl Strategy<Value = usize> {
    (0..COLUMN_COUNT).prop_filter("sortable", |&column| is_sortable(column))
}

// ===== Property 1: Projection =====

proptest! {
    #[test]
    fn projection_has_one_cell_per_column(record in record()) {
        let row = project(&record);
        prop_assert_eq!(row.len(), COLUMN_COUNT);
    }

    #[test]
    fn projection_is_deterministic(record in record()) {
        prop_assert_eq!(project(&record), project(&record));
    }
}

// ===== Property 2: Sorting =====

proptest! {
    #[test]
    fn descending_is_reverse_of_ascending(
        records in prop::collection::vec(record(), 0..12),
        column in sortable_column(),
    ) {
        let rows: Vec<_> = records.iter().map(project).collect();
        let asc = sort_rows(rows.clone(), column, SortDirection::Asc);
        let mut desc = sort_rows(rows, column, SortDirection::Desc);
        desc.reverse();
        prop_assert_eq!(asc, desc);
    }

    #[test]
    fn sorting_keeps_every_row(
        records in prop::collection::vec(record(), 0..12),
        column in sortable_column(),
    ) {
        let spec = SortSpec { column, direction: SortDirection::Asc };
        let mut indices: Vec<_> = build_rows(&records, None, Some(spec))
            .into_iter()
            .map(|row| row.data_index)
            .collect();
        indices.sort_unstable();
        prop_assert_eq!(indices, (0..records.len()).collect::<Vec<_>>());
    }
}

// ===== Property 3: Filtering =====

proptest! {
    #[test]
    fn filtered_rows_all_match_query(
        records in prop::collection::vec(record(), 0..12),
        query in "[a-z.-]{1,3}",
    ) {
        let rows = build_rows(&records, Some(&query), None);
        prop_assert!(rows.len() <= records.len());
        for row in &rows {
            prop_assert!(matches(&query, &row.row, &COLUMNS));
        }
    }

    #[test]
    fn filtering_preserves_payload_order(
        records in prop::collection::vec(record(), 0..12),
        query in "[a-z]{1,2}",
    ) {
        let indices: Vec<_> = build_rows(&records, Some(&query), None)
            .into_iter()
            .map(|row| row.data_index)
            .collect();
        prop_assert!(indices.windows(2).all(|pair| pair[0] < pair[1]));
    }
}

// ===== Property 4: Page sizes =====

proptest! {
    #[test]
    fn page_size_steps_stay_valid(start in 0..ROWS_PER_PAGE_OPTIONS.len(), larger in any::<bool>()) {
        let next = step_page_size(ROWS_PER_PAGE_OPTIONS[start], larger);
        prop_assert!(is_valid_page_size(next));
    }
}
