//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod classroom;
pub mod error;
pub mod identifiers;
pub mod key_action;
pub mod lenient;
pub mod query;
pub mod scalar;

// Re-export for convenience
pub use classroom::{ClassroomRecord, Phase, Team, ToolboxOrder, User};
pub use error::{AppError, InputError, ParseError};
pub use identifiers::{InvalidRecordId, RecordId};
pub use key_action::KeyAction;
pub use query::{DataSelector, QueryResult};
pub use scalar::Scalar;
