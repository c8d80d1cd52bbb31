use std::collections::HashSet;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;

use crate::{normalize_optional_text, IntakeError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterSubscription {
    pub email: String,
    pub subscribed_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct Subscribers {
    // lowercase keys for duplicate detection
    known: HashSet<String>,
    entries: Vec<NewsletterSubscription>,
}

/// Newsletter sign-ups. An address can subscribe once.
#[derive(Debug, Default)]
pub struct NewsletterStore {
    inner: Mutex<Subscribers>,
}

impl NewsletterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `email`. Duplicates compare trimmed and case-insensitively.
    pub fn subscribe(&self, email: Option<String>) -> Result<NewsletterSubscription, IntakeError> {
        let Some(email) = normalize_optional_text(email).filter(|email| is_plausible_email(email))
        else {
            return Err(IntakeError::Invalid(vec!["Invalid email.".to_string()]));
        };

        let key = email.to_lowercase();
        let mut inner = self.inner.lock();
        if !inner.known.insert(key) {
            return Err(IntakeError::AlreadySubscribed(email));
        }
        let subscription = NewsletterSubscription {
            email,
            subscribed_at: Utc::now(),
        };
        inner.entries.push(subscription.clone());
        tracing::info!(total = inner.entries.len(), "newsletter subscription added");
        Ok(subscription)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn subscribers(&self) -> Vec<NewsletterSubscription> {
        self.inner.lock().entries.clone()
    }
}

/// The only check the sign-up forms make: an `@` somewhere in the address.
pub(crate) fn is_plausible_email(email: &str) -> bool {
    email.contains('@')
}

#[cfg(test)]
mod tests {
    use super::NewsletterStore;
    use crate::IntakeError;

    #[test]
    fn subscribe_accepts_new_email() {
        let store = NewsletterStore::new();
        let subscription = store
            .subscribe(Some(" dev@example.com ".to_string()))
            .expect("valid email");
        assert_eq!(subscription.email, "dev@example.com");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn subscribe_rejects_invalid_email() {
        let store = NewsletterStore::new();
        for email in [None, Some(String::new()), Some("not-an-email".to_string())] {
            let err = store.subscribe(email).unwrap_err();
            assert_eq!(err, IntakeError::Invalid(vec!["Invalid email.".to_string()]));
        }
        assert!(store.is_empty());
    }

    #[test]
    fn subscribe_rejects_duplicates_ignoring_case() {
        let store = NewsletterStore::new();
        store
            .subscribe(Some("dev@example.com".to_string()))
            .expect("first subscription");
        let err = store
            .subscribe(Some("DEV@Example.com".to_string()))
            .unwrap_err();
        assert!(matches!(err, IntakeError::AlreadySubscribed(_)));
        assert_eq!(store.subscribers().len(), 1);
    }
}
