//! Page Configuration
//!
//! The host page may embed overrides as
//! `<script id="todo-config" type="application/json">{ ... }</script>`.

use dublin_todo_core::{DomainResult, TodoConfig};

pub const CONFIG_ELEMENT_ID: &str = "todo-config";

/// Read the embedded config; defaults when the element is absent.
pub fn load() -> DomainResult<TodoConfig> {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match raw {
        Some(raw) if !raw.trim().is_empty() => TodoConfig::from_json(&raw),
        _ => Ok(TodoConfig::default()),
    }
}
