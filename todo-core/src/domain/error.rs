//! Domain Layer - Errors
//!
//! The error type shared by every store operation.

use thiserror::Error;

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
///
/// Unreadable stored data is not represented here: reads recover to an
/// empty collection instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    /// The message without its category prefix, suitable for a status line.
    pub fn user_message(&self) -> &str {
        match self {
            DomainError::InvalidInput(msg)
            | DomainError::Conflict(msg)
            | DomainError::Storage(msg) => msg,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::InvalidInput(_))
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(value: serde_json::Error) -> Self {
        DomainError::Storage(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_category() {
        let err = DomainError::InvalidInput("empty".to_string());
        assert_eq!(err.to_string(), "Invalid input: empty");
        assert_eq!(err.user_message(), "empty");
        assert!(err.is_validation());
    }

    #[test]
    fn test_conflict_is_not_validation() {
        let err = DomainError::Conflict("dup".to_string());
        assert!(!err.is_validation());
        assert_eq!(err.user_message(), "dup");
    }
}
