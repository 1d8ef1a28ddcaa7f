//! Newsletter email validation.

use std::sync::LazyLock;

use regex::Regex;

use super::error::{DomainError, DomainResult};

/// Message shown for both empty and malformed addresses.
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

/// Trim and validate an address, returning the normalized form.
pub fn validate_email(raw: &str) -> DomainResult<String> {
    let email = raw.trim();
    if email.is_empty() || !EMAIL_RE.is_match(email) {
        return Err(DomainError::InvalidInput(INVALID_EMAIL_MESSAGE.to_string()));
    }
    Ok(email.to_string())
}
