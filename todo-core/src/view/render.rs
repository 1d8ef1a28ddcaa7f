//! View Renderer
//!
//! Builds the full list view from the persisted collection. There is no
//! diffing: every command produces a fresh `ListView`.

use std::fmt::Write;

use crate::commands::UiSession;
use crate::config::TodoConfig;
use crate::domain::{Filter, Record, RecordId};
use super::escape::escape_html;

/// Counts over the whole collection, independent of the filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
}

impl Stats {
    pub fn of(records: &[Record]) -> Self {
        Self {
            total: records.len(),
            completed: records.iter().filter(|r| r.completed).count(),
        }
    }

    pub fn active(&self) -> usize {
        self.total - self.completed
    }
}

/// One presentation row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: RecordId,
    /// Raw text, for the edit input and text nodes
    pub text: String,
    /// HTML-escaped text, for markup
    pub label_html: String,
    pub completed: bool,
    pub created_at: String,
    pub editing: bool,
    pub draggable: bool,
    /// This row is the active drag source
    pub dragging: bool,
    /// This row is the hovered drop target
    pub drag_over: bool,
}

impl RowView {
    fn from_record(record: &Record, session: &UiSession) -> Self {
        let editing = session.editing == Some(record.id);
        Self {
            id: record.id,
            text: record.text.clone(),
            label_html: escape_html(&record.text),
            completed: record.completed,
            created_at: record.created_at.clone(),
            editing,
            draggable: !editing,
            dragging: session.drag.source() == Some(record.id),
            drag_over: session.drag.hovered() == Some(record.id),
        }
    }

    /// `todo-item` plus state modifiers
    pub fn class_name(&self) -> String {
        let mut c = String::from("todo-item");
        if self.completed { c.push_str(" completed"); }
        if self.editing { c.push_str(" editing"); }
        if self.dragging { c.push_str(" dragging"); }
        if self.drag_over { c.push_str(" drag-over"); }
        c
    }

    pub fn to_html(&self, edit_max_len: usize) -> String {
        let mut html = String::new();
        let _ = write!(
            html,
            r#"<li class="{}" draggable="{}" data-id="{}">"#,
            self.class_name(),
            self.draggable,
            self.id
        );
        let _ = write!(
            html,
            r#"<input type="checkbox" class="todo-checkbox"{}>"#,
            if self.completed { " checked" } else { "" }
        );
        if self.editing {
            let _ = write!(
                html,
                r#"<input type="text" class="todo-edit-input" value="{}" maxlength="{}">"#,
                self.label_html, edit_max_len
            );
        } else {
            let _ = write!(
                html,
                r#"<span class="todo-text" title="Double-click to edit">{}</span>"#,
                self.label_html
            );
        }
        html.push_str(r#"<button class="todo-delete">Delete</button></li>"#);
        html
    }
}

/// Everything the list area shows after one render pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListView {
    pub filter: Filter,
    pub rows: Vec<RowView>,
    /// Set when no row matches the filter
    pub empty_message: Option<String>,
    pub stats: Stats,
    pub edit_max_len: usize,
}

impl ListView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, id: RecordId) -> Option<&RowView> {
        self.rows.iter().find(|r| r.id == id)
    }

    pub fn ids(&self) -> Vec<RecordId> {
        self.rows.iter().map(|r| r.id).collect()
    }

    /// Whether a pointer over row `id` is a new hover target: a row is being
    /// dragged and `id` is neither that row nor the current target.
    pub fn accepts_hover(&self, id: RecordId) -> bool {
        self.rows.iter().any(|r| r.dragging)
            && self.row(id).is_some_and(|r| !r.dragging && !r.drag_over)
    }

    /// List markup, one `<li>` per row or the empty-state item
    pub fn to_html(&self) -> String {
        if let Some(message) = &self.empty_message {
            return format!(r#"<li class="empty-state"><p>{}</p></li>"#, escape_html(message));
        }
        self.rows.iter().map(|row| row.to_html(self.edit_max_len)).collect()
    }
}

/// Render `records` through `filter`, preserving order.
pub fn render(records: &[Record], filter: Filter, session: &UiSession, config: &TodoConfig) -> ListView {
    let rows: Vec<RowView> = records
        .iter()
        .filter(|r| filter.matches(r))
        .map(|r| RowView::from_record(r, session))
        .collect();

    ListView {
        filter,
        empty_message: rows.is_empty().then(|| config.empty_state_message.clone()),
        rows,
        stats: Stats::of(records),
        edit_max_len: config.edit_max_len,
    }
}
