//! Record Entity
//!
//! One to-do entry. Field names on the wire are camelCase, so an existing
//! `dublinTodos` blob written by the page loads as is.

use serde::{Deserialize, Serialize};

/// Record identifier: milliseconds since the Unix epoch at creation time,
/// bumped when needed to stay unique.
pub type RecordId = u64;

/// A to-do record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Unique identifier, never changes
    pub id: RecordId,
    /// User-entered text
    pub text: String,
    /// Completion status
    pub completed: bool,
    /// Display-formatted creation time
    pub created_at: String,
}

impl Record {
    /// Create a new, not yet completed record
    pub fn new(id: RecordId, text: impl Into<String>, created_at: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            created_at: created_at.into(),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.completed
    }
}
