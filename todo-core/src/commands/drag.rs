//! Drag Interaction Session
//!
//! `Idle -> Dragging -> Hovering -> (drop | cancel) -> Idle`.
//! One drag at a time; starting a new one replaces the source.

use crate::domain::RecordId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { source: RecordId },
    Hovering { source: RecordId, target: RecordId },
}

/// Reorder produced by a completed drop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReorderRequest {
    pub dragged: RecordId,
    pub target: RecordId,
    pub insert_before: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragSession {
    state: DragState,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state != DragState::Idle
    }

    pub fn source(&self) -> Option<RecordId> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging { source } | DragState::Hovering { source, .. } => Some(source),
        }
    }

    pub fn hovered(&self) -> Option<RecordId> {
        match self.state {
            DragState::Hovering { target, .. } => Some(target),
            _ => None,
        }
    }

    pub fn start(&mut self, source: RecordId) {
        self.state = DragState::Dragging { source };
    }

    /// Pointer entered a row. The source row itself is never a target.
    pub fn hover(&mut self, target: RecordId) {
        if let Some(source) = self.source() {
            if source != target {
                self.state = DragState::Hovering { source, target };
            }
        }
    }

    /// Pointer left a row; only clears the highlight if it was that row.
    pub fn leave(&mut self, target: RecordId) {
        if let DragState::Hovering { source, target: current } = self.state {
            if current == target {
                self.state = DragState::Dragging { source };
            }
        }
    }

    /// Finish the drag on `target`. Always returns to `Idle`.
    pub fn drop_on(&mut self, target: RecordId, insert_before: bool) -> Option<ReorderRequest> {
        let source = self.source();
        self.state = DragState::Idle;
        match source {
            Some(dragged) if dragged != target => Some(ReorderRequest { dragged, target, insert_before }),
            _ => None,
        }
    }

    /// Drag ended without a drop
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_drag_and_drop() {
        let mut drag = DragSession::new();
        assert!(!drag.is_active());

        drag.start(1);
        assert_eq!(drag.state(), DragState::Dragging { source: 1 });

        drag.hover(2);
        assert_eq!(drag.state(), DragState::Hovering { source: 1, target: 2 });
        assert_eq!(drag.hovered(), Some(2));

        let request = drag.drop_on(2, true);
        assert_eq!(request, Some(ReorderRequest { dragged: 1, target: 2, insert_before: true }));
        assert_eq!(drag.state(), DragState::Idle);
    }

    #[test]
    fn test_hover_on_source_is_ignored() {
        let mut drag = DragSession::new();
        drag.start(1);
        drag.hover(1);
        assert_eq!(drag.state(), DragState::Dragging { source: 1 });
    }

    #[test]
    fn test_hover_while_idle_is_ignored() {
        let mut drag = DragSession::new();
        drag.hover(3);
        assert_eq!(drag.state(), DragState::Idle);
    }

    #[test]
    fn test_leave_only_clears_matching_target() {
        let mut drag = DragSession::new();
        drag.start(1);
        drag.hover(2);
        drag.hover(3);
        drag.leave(2);
        assert_eq!(drag.hovered(), Some(3));
        drag.leave(3);
        assert_eq!(drag.state(), DragState::Dragging { source: 1 });
    }

    #[test]
    fn test_drop_on_source_yields_nothing() {
        let mut drag = DragSession::new();
        drag.start(4);
        assert_eq!(drag.drop_on(4, false), None);
        assert!(!drag.is_active());
    }

    #[test]
    fn test_drop_without_drag_yields_nothing() {
        let mut drag = DragSession::new();
        assert_eq!(drag.drop_on(4, false), None);
    }

    #[test]
    fn test_cancel_resets() {
        let mut drag = DragSession::new();
        drag.start(1);
        drag.hover(2);
        drag.cancel();
        assert_eq!(drag.state(), DragState::Idle);
        assert_eq!(drag.source(), None);
    }

    #[test]
    fn test_new_drag_overwrites_source() {
        let mut drag = DragSession::new();
        drag.start(1);
        drag.hover(2);
        drag.start(5);
        assert_eq!(drag.state(), DragState::Dragging { source: 5 });
    }
}
