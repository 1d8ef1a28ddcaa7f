//! Subscriber Store
//!
//! Newsletter addresses, validated and deduplicated on insert.

use crate::domain::{validate_email, DomainError, DomainResult};
use super::traits::{read_collection, write_collection, KeyValueStorage};

pub const ALREADY_SUBSCRIBED_MESSAGE: &str = "This email is already subscribed!";

pub struct SubscriberStore<S: KeyValueStorage> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> SubscriberStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn list(&self) -> Vec<String> {
        read_collection(&self.storage, &self.key)
    }

    /// Validate and store an address; returns the trimmed address.
    pub fn subscribe(&self, raw: &str) -> DomainResult<String> {
        let email = validate_email(raw)?;

        let mut emails = self.list();
        if emails.contains(&email) {
            return Err(DomainError::Conflict(ALREADY_SUBSCRIBED_MESSAGE.to_string()));
        }
        emails.push(email.clone());
        write_collection(&self.storage, &self.key, &emails)?;

        tracing::debug!(total = emails.len(), "newsletter subscription stored");
        Ok(email)
    }
}
