use serde::{Deserialize, Serialize};

use orderdesk_core::ValueObject;

/// A customer placing orders.
///
/// Immutable once built; no validation beyond presence of both fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Client {
    name: String,
    email: String,
}

impl Client {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl ValueObject for Client {}
