//! Payload input sources.
//!
//! The classroom payload comes from one of:
//! - a file, read once at startup
//! - piped stdin, read to EOF on a background thread
//!
//! Both deliver the raw document text; decoding happens in [`crate::parser`].

use crate::model::error::InputError;
use std::path::PathBuf;

pub mod file;
pub mod stdin;

pub use file::FileSource;
pub use stdin::StdinSource;

/// Unified input source for the classroom payload.
#[derive(Debug)]
pub enum InputSource {
    File(FileSource),
    Stdin(StdinSource),
}

impl InputSource {
    /// Poll for the payload.
    ///
    /// Non-blocking. Returns `Some(text)` exactly once, when the whole
    /// document is available; `None` before that and after it.
    ///
    /// # Errors
    ///
    /// Returns `InputError` for I/O errors.
    pub fn poll(&mut self) -> Result<Option<String>, InputError> {
        match self {
            InputSource::File(f) => Ok(f.take_payload()),
            InputSource::Stdin(s) => s.poll(),
        }
    }

    /// Whether the payload may still arrive.
    ///
    /// - File: always false (read at construction)
    /// - Stdin: true until EOF is reached
    pub fn is_live(&self) -> bool {
        match self {
            InputSource::File(_) => false,
            InputSource::Stdin(s) => !s.is_complete(),
        }
    }
}

/// Detect and create the appropriate input source.
///
/// A file path wins; otherwise stdin must be piped.
///
/// # Errors
///
/// Returns `InputError::NoInput` if no file is provided and stdin is a terminal.
/// Returns `InputError::FileNotFound` if the file does not exist.
/// Returns `InputError::Io` for I/O errors during file reading.
pub fn detect_input_source(file: Option<PathBuf>) -> Result<InputSource, InputError> {
    match file {
        Some(path) => Ok(InputSource::File(FileSource::new(path)?)),
        None => Ok(InputSource::Stdin(StdinSource::new()?)),
    }
}
