//! Repository Layer - Core Traits
//!
//! Abstract key-value storage the stores persist into.
//! Implementations can use `localStorage`, an in-memory map, etc.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::DomainResult;

/// String-keyed storage holding one serialized value per key.
///
/// Handles are cheap to clone and clones share the same underlying data,
/// like a browser `Storage` object.
pub trait KeyValueStorage: Clone {
    /// Read the raw value stored under `key`
    fn get_item(&self, key: &str) -> DomainResult<Option<String>>;

    /// Overwrite the value stored under `key`
    fn set_item(&self, key: &str, value: &str) -> DomainResult<()>;
}

/// Read a JSON array stored under `key`.
///
/// Missing, unreadable or malformed data yields an empty collection.
pub(crate) fn read_collection<S, T>(storage: &S, key: &str) -> Vec<T>
where
    S: KeyValueStorage,
    T: DeserializeOwned,
{
    let raw = match storage.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!(key, error = %e, "storage read failed, treating as empty");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<T>>(&raw) {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(key, error = %e, "stored collection is not valid, treating as empty");
            Vec::new()
        }
    }
}

/// Serialize `items` and overwrite the value under `key`.
pub(crate) fn write_collection<S, T>(storage: &S, key: &str, items: &[T]) -> DomainResult<()>
where
    S: KeyValueStorage,
    T: Serialize,
{
    let json = serde_json::to_string(items)?;
    storage.set_item(key, &json)
}
