//! Commands and their outcomes.

use crate::domain::{DomainError, Filter, RecordId};
use crate::view::ListView;

/// One user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Re-render from storage without changing anything
    Refresh,
    Add { text: String },
    Remove { id: RecordId },
    Toggle { id: RecordId },
    StartEdit { id: RecordId },
    CommitEdit { id: RecordId, text: String },
    CancelEdit,
    ClearCompleted,
    SetFilter(Filter),
    DragStart { id: RecordId },
    DragEnter { id: RecordId },
    DragLeave { id: RecordId },
    Drop { target: RecordId, insert_before: bool },
    DragEnd,
    Subscribe { email: String },
}

/// Which status line a notice belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeTarget {
    TodoList,
    Newsletter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn class_name(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

/// User-visible status message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub target: NoticeTarget,
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(target: NoticeTarget, text: impl Into<String>) -> Self {
        Self { target, kind: NoticeKind::Success, text: text.into() }
    }

    pub fn error(target: NoticeTarget, text: impl Into<String>) -> Self {
        Self { target, kind: NoticeKind::Error, text: text.into() }
    }

    /// Errors stay until replaced; successes fade after a timeout.
    pub fn is_transient(&self) -> bool {
        self.kind == NoticeKind::Success
    }

    pub(crate) fn from_error(target: NoticeTarget, err: &DomainError) -> Self {
        match err {
            DomainError::Storage(_) => Self::error(target, STORAGE_FAILED_MESSAGE),
            other => Self::error(target, other.user_message()),
        }
    }
}

pub const STORAGE_FAILED_MESSAGE: &str = "Could not save your changes.";
pub const SUBSCRIBED_MESSAGE: &str = "Thank you for subscribing! Check your email for updates about Dublin.";

/// Result of one dispatch: the re-rendered list and an optional notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub view: ListView,
    pub notice: Option<Notice>,
}
