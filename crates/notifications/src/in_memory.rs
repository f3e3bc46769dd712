//! In-memory email sender for tests/dev.

use std::sync::Mutex;

use crate::email::{EmailSender, NotificationError};

/// One recorded `send` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub to: String,
    pub message: String,
}

/// Records every email instead of delivering it.
#[derive(Debug, Default)]
pub struct InMemoryEmailSender {
    sent: Mutex<Vec<SentEmail>>,
}

impl InMemoryEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything sent so far, oldest first.
    pub fn sent(&self) -> Vec<SentEmail> {
        match self.sent.lock() {
            Ok(sent) => sent.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl EmailSender for InMemoryEmailSender {
    fn send(&self, to: &str, message: &str) -> Result<(), NotificationError> {
        let mut sent = self.sent.lock().map_err(|_| NotificationError::Poisoned)?;
        sent.push(SentEmail {
            to: to.to_string(),
            message: message.to_string(),
        });
        Ok(())
    }
}
