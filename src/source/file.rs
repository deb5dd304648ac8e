//! File-based payload source.
//!
//! The file is read once, eagerly, at construction; errors surface before the
//! terminal is taken over.

use crate::model::error::InputError;
use std::fs;
use std::path::{Path, PathBuf};

/// Read-once file source.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    payload: Option<String>,
}

impl FileSource {
    /// Read the whole file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file does not exist.
    /// Returns `InputError::Io` for other I/O errors (including non-UTF-8 content).
    pub fn new(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(InputError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let payload = fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), bytes = payload.len(), "Read payload file");

        Ok(Self {
            path: path.to_path_buf(),
            payload: Some(payload),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Hand out the payload. Returns `Some` exactly once.
    pub fn take_payload(&mut self) -> Option<String> {
        self.payload.take()
    }
}
