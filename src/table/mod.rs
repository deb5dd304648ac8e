//! Classroom table engine.
//!
//! Pure functions that turn classroom records into what the table shows:
//! projection into display rows, search filtering, column sorting and
//! click routing. Nothing here touches the terminal.

pub mod cell;
pub mod options;
pub mod projector;
pub mod router;
pub mod rows;
pub mod schema;
pub mod search;
pub mod sort;

pub use cell::{CellValue, DisplayRow, COLUMN_COUNT, PLACEHOLDER};
pub use options::TableOptions;
pub use projector::project;
pub use router::{route, DetailKind, DetailTarget};
pub use rows::{build_rows, TableRow};
pub use schema::{Column, ColumnSchema, SortMode, COLUMNS};
pub use search::matches;
pub use sort::{sort_rows, SortDirection, SortSpec};
