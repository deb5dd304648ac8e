//! classview
//!
//! TUI table for browsing classroom project records.
//!
//! Pure core: `model`, `parser`, `table` and `state` hold no I/O and are
//! tested without a terminal. Impure shell: `source`, `logging`, `config`
//! and `view` talk to files, stdin and the terminal.

pub mod config;
pub mod logging;
pub mod model;
pub mod parser;
pub mod source;
pub mod state;
pub mod table;
pub mod view;
