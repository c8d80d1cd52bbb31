use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::{newsletter_store::is_plausible_email, normalize_optional_text, IntakeError};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewContactInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub sent_at: DateTime<Utc>,
}

/// Messages sent through the contact form.
#[derive(Debug, Default)]
pub struct ContactInbox {
    messages: RwLock<Vec<ContactMessage>>,
}

fn at_least(value: &Option<String>, min_chars: usize) -> bool {
    value
        .as_deref()
        .is_some_and(|value| value.chars().count() >= min_chars)
}

impl ContactInbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate every field, reporting all problems at once, then append.
    pub fn submit(&self, input: NewContactInput) -> Result<ContactMessage, IntakeError> {
        let name = normalize_optional_text(input.name);
        let email = normalize_optional_text(input.email);
        let subject = normalize_optional_text(input.subject);
        let message = normalize_optional_text(input.message);

        let mut reasons = Vec::new();
        if !at_least(&name, 2) {
            reasons.push("Name must have at least 2 characters.".to_string());
        }
        if !email.as_deref().is_some_and(is_plausible_email) {
            reasons.push("Invalid email.".to_string());
        }
        if !at_least(&subject, 3) {
            reasons.push("Subject must have at least 3 characters.".to_string());
        }
        if !at_least(&message, 10) {
            reasons.push("Message must have at least 10 characters.".to_string());
        }

        let (Some(name), Some(email), Some(subject), Some(message)) = (name, email, subject, message)
        else {
            return Err(IntakeError::Invalid(reasons));
        };
        if !reasons.is_empty() {
            return Err(IntakeError::Invalid(reasons));
        }

        let contact = ContactMessage {
            name,
            email,
            subject,
            message,
            sent_at: Utc::now(),
        };
        self.messages.write().push(contact.clone());
        tracing::info!(subject = %contact.subject, "contact message received");
        Ok(contact)
    }

    pub fn messages(&self) -> Vec<ContactMessage> {
        self.messages.read().clone()
    }
}
