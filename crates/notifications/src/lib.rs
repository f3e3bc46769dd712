//! Customer notifications.
//!
//! Domain code only sees the [`EmailSender`] capability; which transport sits
//! behind it is decided by whoever wires the application together.

pub mod email;
pub mod in_memory;

pub use email::{EmailSender, EmailService, NotificationError};
pub use in_memory::{InMemoryEmailSender, SentEmail};
