//! Browser Storage
//!
//! `KeyValueStorage` backed by `window.localStorage`, falling back to an
//! in-memory map when the page may not use it (private mode, sandboxed
//! iframes). The fallback keeps the widget usable for the session.

use dublin_todo_core::{DomainError, DomainResult, KeyValueStorage, MemoryStorage};
use wasm_bindgen::JsValue;

#[derive(Clone, Debug)]
pub enum BrowserStorage {
    Local(web_sys::Storage),
    Memory(MemoryStorage),
}

impl BrowserStorage {
    pub fn open() -> Self {
        match local_storage() {
            Ok(storage) => BrowserStorage::Local(storage),
            Err(e) => {
                tracing::warn!(error = %e, "localStorage unavailable, changes will not survive a reload");
                BrowserStorage::Memory(MemoryStorage::new())
            }
        }
    }

    pub fn is_persistent(&self) -> bool {
        matches!(self, BrowserStorage::Local(_))
    }
}

fn local_storage() -> DomainResult<web_sys::Storage> {
    let window = web_sys::window().ok_or_else(|| DomainError::Storage("no window".to_string()))?;
    window
        .local_storage()
        .map_err(js_error)?
        .ok_or_else(|| DomainError::Storage("localStorage is disabled".to_string()))
}

fn js_error(value: JsValue) -> DomainError {
    DomainError::Storage(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> DomainResult<Option<String>> {
        match self {
            BrowserStorage::Local(storage) => storage.get_item(key).map_err(js_error),
            BrowserStorage::Memory(storage) => storage.get_item(key),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> DomainResult<()> {
        match self {
            BrowserStorage::Local(storage) => storage.set_item(key, value).map_err(js_error),
            BrowserStorage::Memory(storage) => storage.set_item(key, value),
        }
    }
}
