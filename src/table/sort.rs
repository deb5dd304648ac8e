//! Column sorting.
//!
//! Lexicographic columns compare cell text with the Czech collation at
//! tertiary strength: accents and case both count, lowercase sorts before
//! uppercase and `ch` follows `h`. Every other column, including the
//! unsortable Team and Region columns and out-of-range indices, compares the
//! integer prefix of each cell (non-numeric → 0). The UI never sorts the
//! unsortable columns; if a caller does, every row compares equal.
//!
//! Descending order is the reversed ascending order, so ties keep mirrored
//! relative positions in both directions.

use crate::table::cell::{CellValue, DisplayRow};
use crate::table::schema::{SortMode, COLUMNS};
use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;
use serde::Deserialize;
use std::borrow::Borrow;
use std::cmp::Ordering;
use tracing::warn;

/// Sort direction. Spelled `"asc"`/`"desc"` in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Header marker.
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        }
    }
}

/// Active sort: column index and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub column: usize,
    pub direction: SortDirection,
}

/// Sort rows by `column`.
///
/// Generic over anything that borrows a [`DisplayRow`] so callers can carry
/// extra data (such as the record index) alongside each row.
pub fn sort_rows<R: Borrow<DisplayRow>>(
    mut rows: Vec<R>,
    column: usize,
    direction: SortDirection,
) -> Vec<R> {
    let lexicographic = COLUMNS
        .get(column)
        .is_some_and(|c| c.sort_mode == SortMode::Lexicographic);

    if lexicographic {
        match collator() {
            Some(collator) => rows.sort_by(|a, b| {
                collator.compare(cell_text(row_of(a), column), cell_text(row_of(b), column))
            }),
            None => {
                rows.sort_by(|a, b| cell_text(row_of(a), column).cmp(cell_text(row_of(b), column)))
            }
        }
    } else {
        rows.sort_by(|a, b| compare_numeric(row_of(a), row_of(b), column));
    }

    if direction == SortDirection::Desc {
        rows.reverse();
    }
    rows
}

/// Czech collator from the compiled-in CLDR data.
fn collator() -> Option<Collator> {
    match Collator::try_new(&locale!("cs").into(), CollatorOptions::new()) {
        Ok(collator) => Some(collator),
        Err(error) => {
            warn!(%error, "Czech collation unavailable, sorting text by code point");
            None
        }
    }
}

fn row_of<R: Borrow<DisplayRow>>(row: &R) -> &DisplayRow {
    row.borrow()
}

fn cell_text(row: &DisplayRow, column: usize) -> &str {
    row.cell(column).and_then(CellValue::as_text).unwrap_or_default()
}

fn compare_numeric(a: &DisplayRow, b: &DisplayRow, column: usize) -> Ordering {
    numeric_value(a.cell(column)).cmp(&numeric_value(b.cell(column)))
}

/// Integer value of a cell for numeric sorting. Lists and missing cells are 0.
fn numeric_value(cell: Option<&CellValue>) -> i64 {
    cell.and_then(CellValue::as_text).map_or(0, parse_int_prefix)
}

/// Parse a leading base-10 integer the way a lenient browser parser does.
///
/// Skips leading whitespace, accepts one optional sign, then consumes digits
/// until the first non-digit. No digits yields 0. Overflow saturates.
///
/// ```
/// use classview::table::sort::parse_int_prefix;
///
/// assert_eq!(parse_int_prefix("  42 Kč"), 42);
/// assert_eq!(parse_int_prefix("-7"), -7);
/// assert_eq!(parse_int_prefix("abc"), 0);
/// ```
pub fn parse_int_prefix(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(i64::from(digit - b'0'))
        });

    if negative {
        -magnitude
    } else {
        magnitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::cell::{COLUMN_COUNT, PLACEHOLDER};
    use crate::table::schema::{EARNINGS, PROJECT, REGION, TEAM};

    fn row_from(values: &[(usize, CellValue)]) -> DisplayRow {
        let mut cells: [CellValue; COLUMN_COUNT] =
            std::array::from_fn(|_| CellValue::from(PLACEHOLDER));
        for (column, value) in values {
            cells[*column] = value.clone();
        }
        DisplayRow::new(cells)
    }

    fn row_with(column: usize, value: CellValue) -> DisplayRow {
        row_from(&[(column, value)])
    }

    fn texts(rows: &[DisplayRow], column: usize) -> Vec<&str> {
        rows.iter().map(|row| cell_text(row, column)).collect()
    }

    #[test]
    fn earnings_sort_treats_non_numeric_as_zero() {
        let rows: Vec<DisplayRow> = ["100", "abc", "20"]
            .into_iter()
            .map(|v| row_with(EARNINGS, CellValue::from(v)))
            .collect();

        let sorted = sort_rows(rows, EARNINGS, SortDirection::Asc);
        assert_eq!(texts(&sorted, EARNINGS), vec!["abc", "20", "100"]);
    }

    #[test]
    fn numeric_sort_does_not_compare_as_text() {
        let rows: Vec<DisplayRow> = ["9", "10", "-"]
            .into_iter()
            .map(|v| row_with(EARNINGS, CellValue::from(v)))
            .collect();

        let sorted = sort_rows(rows, EARNINGS, SortDirection::Asc);
        assert_eq!(texts(&sorted, EARNINGS), vec!["-", "9", "10"]);
    }

    fn sorted_texts(values: &[&str]) -> Vec<String> {
        let rows: Vec<DisplayRow> = values
            .iter()
            .map(|v| row_with(PROJECT, CellValue::from(*v)))
            .collect();
        let sorted = sort_rows(rows, PROJECT, SortDirection::Asc);
        texts(&sorted, PROJECT)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn lexicographic_sort_breaks_case_ties_after_letters() {
        assert_eq!(sorted_texts(&["b", "C", "a"]), vec!["a", "b", "C"]);
        assert_eq!(sorted_texts(&["B", "a", "b"]), vec!["a", "b", "B"]);
    }

    #[test]
    fn lexicographic_sort_places_accented_letters_with_their_base() {
        assert_eq!(
            sorted_texts(&["zebra", "Čápi", "auto", "Dub"]),
            vec!["auto", "Čápi", "Dub", "zebra"]
        );
        assert_eq!(
            sorted_texts(&["Žabka", "Šroub", "Ryba", "sova"]),
            vec!["Ryba", "sova", "Šroub", "Žabka"]
        );
    }

    #[test]
    fn lexicographic_sort_uses_czech_ch_digraph() {
        assert_eq!(
            sorted_texts(&["ivan", "chata", "hrad"]),
            vec!["hrad", "chata", "ivan"]
        );
    }

    #[test]
    fn lexicographic_sort_keeps_digits_before_letters() {
        assert_eq!(
            sorted_texts(&["Dokončeno", "2/2: Výroba", "1/2: Plán"]),
            vec!["1/2: Plán", "2/2: Výroba", "Dokončeno"]
        );
    }

    #[test]
    fn descending_is_reverse_of_ascending() {
        let rows: Vec<DisplayRow> = ["3", "1", "1", "2"]
            .into_iter()
            .enumerate()
            .map(|(i, v)| {
                row_from(&[
                    (PROJECT, CellValue::Text(format!("row{i}"))),
                    (EARNINGS, CellValue::from(v)),
                ])
            })
            .collect();

        let asc = sort_rows(rows.clone(), EARNINGS, SortDirection::Asc);
        let mut desc = sort_rows(rows, EARNINGS, SortDirection::Desc);
        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn unsortable_columns_fall_through_to_numeric_and_keep_order() {
        // Known gap: list cells parse as 0, so every row compares equal.
        let rows: Vec<DisplayRow> = ["x", "y", "z"]
            .into_iter()
            .map(|v| {
                row_from(&[
                    (PROJECT, CellValue::from(v)),
                    (REGION, CellValue::StringList(vec![Some(v.to_string())])),
                ])
            })
            .collect();

        let by_team = sort_rows(rows.clone(), TEAM, SortDirection::Asc);
        assert_eq!(texts(&by_team, PROJECT), vec!["x", "y", "z"]);
        let by_region = sort_rows(rows, REGION, SortDirection::Asc);
        assert_eq!(texts(&by_region, PROJECT), vec!["x", "y", "z"]);
    }

    #[test]
    fn sort_carries_extra_data() {
        let rows = vec![
            (0usize, row_with(EARNINGS, CellValue::from("5"))),
            (1usize, row_with(EARNINGS, CellValue::from("1"))),
        ];
        let sorted = sort_rows(
            rows.into_iter().map(Carried::from).collect(),
            EARNINGS,
            SortDirection::Asc,
        );
        let order: Vec<usize> = sorted.iter().map(|c| c.0).collect();
        assert_eq!(order, vec![1, 0]);
    }

    struct Carried(usize, DisplayRow);

    impl From<(usize, DisplayRow)> for Carried {
        fn from((index, row): (usize, DisplayRow)) -> Self {
            Carried(index, row)
        }
    }

    impl Borrow<DisplayRow> for Carried {
        fn borrow(&self) -> &DisplayRow {
            &self.1
        }
    }

    #[test]
    fn parse_int_prefix_follows_lenient_rules() {
        assert_eq!(parse_int_prefix("100"), 100);
        assert_eq!(parse_int_prefix("12abc"), 12);
        assert_eq!(parse_int_prefix("  +8"), 8);
        assert_eq!(parse_int_prefix("-"), 0);
        assert_eq!(parse_int_prefix("1.9"), 1);
        assert_eq!(parse_int_prefix(""), 0);
        assert_eq!(parse_int_prefix("99999999999999999999999"), i64::MAX);
    }

    #[test]
    fn toggled_flips_direction() {
        assert_eq!(SortDirection::Asc.toggled(), SortDirection::Desc);
        assert_eq!(SortDirection::Desc.toggled(), SortDirection::Asc);
    }
}
