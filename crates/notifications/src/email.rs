//! Email capability and the console-backed implementation.

use std::io::{self, Write};
use std::sync::Mutex;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotificationError {
    /// Writing to the underlying stream failed.
    #[error("failed to deliver notification: {0}")]
    Io(#[from] io::Error),

    /// Internal lock poisoning.
    #[error("notification sender lock poisoned")]
    Poisoned,
}

/// Sends a message to a recipient.
///
/// Implementations decide failure semantics; callers get the error back and
/// nothing is retried on their behalf.
pub trait EmailSender: Send + Sync {
    fn send(&self, to: &str, message: &str) -> Result<(), NotificationError>;
}

/// Stand-in for real delivery: writes one line per email to a stream.
#[derive(Debug)]
pub struct EmailService<W> {
    out: Mutex<W>,
}

impl EmailService<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> EmailService<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Consume the service and hand back the stream.
    pub fn into_inner(self) -> Result<W, NotificationError> {
        self.out.into_inner().map_err(|_| NotificationError::Poisoned)
    }
}

impl<W: Write + Send> EmailSender for EmailService<W> {
    fn send(&self, to: &str, message: &str) -> Result<(), NotificationError> {
        let mut out = self.out.lock().map_err(|_| NotificationError::Poisoned)?;
        writeln!(out, "Enviando e-mail para {to}: {message}")?;
        out.flush()?;

        tracing::info!(recipient = %to, "email sent");
        Ok(())
    }
}
