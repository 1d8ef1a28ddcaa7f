//! Per-instance UI state that never reaches storage.

use crate::domain::{Filter, RecordId};
use super::drag::DragSession;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiSession {
    pub filter: Filter,
    /// Row currently showing the inline edit input
    pub editing: Option<RecordId>,
    pub drag: DragSession,
}

impl UiSession {
    pub fn is_editing(&self, id: RecordId) -> bool {
        self.editing == Some(id)
    }
}
