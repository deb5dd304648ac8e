//! Stdin-based payload source for piped input.
//!
//! A background thread reads the pipe to EOF and hands the complete document
//! over a channel, so the event loop never blocks on a slow producer.

use crate::model::error::InputError;
use std::io::{IsTerminal, Read};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

/// Piped stdin source.
///
/// The payload is only available once the producer closes the pipe; until
/// then [`StdinSource::poll`] returns `Ok(None)`.
#[derive(Debug)]
pub struct StdinSource {
    receiver: Receiver<std::io::Result<String>>,
    complete: bool,
}

impl StdinSource {
    /// Start reading stdin in the background.
    ///
    /// # Errors
    ///
    /// Returns `InputError::NoInput` if stdin is an interactive terminal,
    /// which would otherwise leave the table loading forever.
    pub fn new() -> Result<Self, InputError> {
        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Err(InputError::NoInput);
        }
        Ok(Self::from_reader(stdin))
    }

    /// Read from any reader on a background thread.
    pub fn from_reader<R: Read + Send + 'static>(mut reader: R) -> Self {
        let (sender, receiver) = mpsc::channel();
        thread::spawn(move || {
            let mut payload = String::new();
            let result = reader.read_to_string(&mut payload).map(|_| payload);
            // The receiver is gone if the app quit before EOF.
            let _ = sender.send(result);
        });
        Self {
            receiver,
            complete: false,
        }
    }

    /// Non-blocking check for the complete payload.
    ///
    /// Returns `Some(payload)` once, when the reader hit EOF.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` if reading failed.
    pub fn poll(&mut self) -> Result<Option<String>, InputError> {
        if self.complete {
            return Ok(None);
        }
        match self.receiver.try_recv() {
            Ok(result) => {
                self.complete = true;
                Ok(Some(result?))
            }
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => {
                self.complete = true;
                Ok(None)
            }
        }
    }

    /// Whether EOF has been reached (no more data will arrive).
    pub fn is_complete(&self) -> bool {
        self.complete
    }
}
