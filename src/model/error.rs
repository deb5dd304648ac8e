//! Error types for classview.
//!
//! This module defines the error taxonomy using `thiserror` for structured error
//! handling. Errors compose via `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error wrapping all domain-specific failures
//!   - [`InputError`] - Payload file/stdin reading failures (file not found, no input, IO)
//!   - [`ParseError`] - Payload decoding failures (malformed JSON, unexpected shape, API errors)
//!   - `std::io::Error` - Terminal/TUI rendering failures
//!
//! # Error Recovery Strategy
//!
//! Parsing errors are **non-fatal**: a payload that cannot be decoded turns the
//! query into its error state and the table shows the fixed failure banner.
//! Input and terminal errors are fatal and propagate to `main`.
//!
//! Missing or malformed *fields* inside a well-formed payload are never errors
//! at all; the table degrades them to placeholders.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// # Examples
///
/// ```no_run
/// use classview::model::error::{AppError, InputError};
///
/// fn run_app() -> Result<(), AppError> {
///     // InputError automatically converts to AppError via From
///     let _input = read_payload()?;
///     Ok(())
/// }
/// # fn read_payload() -> Result<(), InputError> { Ok(()) }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read the payload from file or stdin. Fatal.
    #[error("Failed to read input: {0}")]
    InputRead(#[from] InputError),

    /// Failed to decode the payload. Non-fatal: surfaces as the error banner.
    #[error("Failed to parse classrooms: {0}")]
    Parse(#[from] ParseError),

    /// Terminal or TUI rendering error. Fatal.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when reading the payload from files or stdin.
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified payload file does not exist at the given path.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use classview::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.json")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.json"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The filesystem path that was not found.
        path: PathBuf,
    },

    /// No input source was provided - user must supply a file path or pipe stdin.
    ///
    /// Occurs when no file argument is given and stdin is an interactive terminal.
    ///
    /// ```
    /// use classview::model::error::InputError;
    ///
    /// let msg = InputError::NoInput.to_string();
    /// assert!(msg.contains("file path or pipe data to stdin"));
    /// ```
    #[error("No input source: provide a file path or pipe data to stdin")]
    NoInput,

    /// Generic I/O error reading from the input source.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors encountered when decoding the API payload.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The payload is not syntactically valid JSON, or the record list is
    /// not an array.
    ///
    /// `message` is extracted from `serde_json::Error` rather than wrapping it.
    ///
    /// ```
    /// use classview::model::error::ParseError;
    ///
    /// let err = ParseError::InvalidJson {
    ///     message: "expected value at line 1 column 1".to_string()
    /// };
    /// assert!(err.to_string().contains("expected value"));
    /// ```
    #[error("Invalid JSON: {message}")]
    InvalidJson {
        /// The JSON parser error message.
        message: String,
    },

    /// The payload is valid JSON but does not contain the selected list.
    #[error("Payload has no '{selector}' list")]
    MissingSelector {
        /// The key that was looked up (`classrooms` or `regionClassrooms`).
        selector: &'static str,
    },

    /// The API reported errors instead of (or alongside) data.
    #[error("API returned errors: {}", messages.join("; "))]
    Api {
        /// Error messages reported by the API.
        messages: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_error_converts_to_app_error() {
        let app: AppError = InputError::NoInput.into();
        assert!(matches!(app, AppError::InputRead(InputError::NoInput)));
    }

    #[test]
    fn parse_error_converts_to_app_error() {
        let app: AppError = ParseError::MissingSelector {
            selector: "classrooms",
        }
        .into();
        assert!(app.to_string().contains("'classrooms'"));
    }

    #[test]
    fn io_error_converts_to_input_error() {
        let io = std::io::Error::other("disk gone");
        let input: InputError = io.into();
        assert!(matches!(input, InputError::Io(_)));
    }

    #[test]
    fn api_error_joins_messages() {
        let err = ParseError::Api {
            messages: vec!["Unauthorized".to_string(), "Try again".to_string()],
        };
        assert_eq!(err.to_string(), "API returned errors: Unauthorized; Try again");
    }
}
