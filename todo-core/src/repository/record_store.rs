//! Record Store
//!
//! Persistence and mutation API over the to-do collection. Every operation
//! reads the whole collection, changes it, and writes the whole collection
//! back as one JSON blob. Specialized positioning lives in
//! `record_positioning`.

use std::rc::Rc;

use crate::domain::{Clock, DomainError, DomainResult, Record, RecordId, SystemClock};
use super::record_positioning::move_record;
use super::traits::{read_collection, write_collection, KeyValueStorage};

pub const EMPTY_TEXT_MESSAGE: &str = "Please enter a to-do item!";
pub const EMPTY_EDIT_MESSAGE: &str = "Todo text cannot be empty!";

/// Record collection stored under one key
pub struct RecordStore<S: KeyValueStorage> {
    storage: S,
    key: String,
    clock: Rc<dyn Clock>,
}

impl<S: KeyValueStorage> RecordStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self::with_clock(storage, key, Rc::new(SystemClock))
    }

    pub fn with_clock(storage: S, key: impl Into<String>, clock: Rc<dyn Clock>) -> Self {
        Self {
            storage,
            key: key.into(),
            clock,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Full collection in stored order; empty when nothing valid is stored.
    pub fn list(&self) -> Vec<Record> {
        read_collection(&self.storage, &self.key)
    }

    /// Overwrite the stored collection
    pub fn save(&self, records: &[Record]) -> DomainResult<()> {
        write_collection(&self.storage, &self.key, records)
    }

    pub fn find(&self, id: RecordId) -> Option<Record> {
        self.list().into_iter().find(|r| r.id == id)
    }

    /// Append a new record built from trimmed `text`.
    pub fn add(&self, text: &str) -> DomainResult<Record> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DomainError::InvalidInput(EMPTY_TEXT_MESSAGE.to_string()));
        }

        let mut records = self.list();
        let record = Record::new(self.next_id(&records), text, self.clock.display_now());
        records.push(record.clone());
        self.save(&records)?;

        tracing::debug!(id = record.id, total = records.len(), "record added");
        Ok(record)
    }

    /// Delete the record if present; nothing is written when the id is absent.
    pub fn remove(&self, id: RecordId) -> DomainResult<bool> {
        let mut records = self.list();
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Ok(false);
        }
        self.save(&records)?;

        tracing::debug!(id, "record removed");
        Ok(true)
    }

    /// Flip `completed`; returns the new value, or `None` if the id is absent.
    pub fn toggle(&self, id: RecordId) -> DomainResult<Option<bool>> {
        let mut records = self.list();
        let Some(record) = records.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };
        record.completed = !record.completed;
        let completed = record.completed;
        self.save(&records)?;

        tracing::debug!(id, completed, "record toggled");
        Ok(Some(completed))
    }

    /// Replace the text in place; id and position are unchanged.
    pub fn edit(&self, id: RecordId, new_text: &str) -> DomainResult<bool> {
        let new_text = new_text.trim();
        if new_text.is_empty() {
            return Err(DomainError::InvalidInput(EMPTY_EDIT_MESSAGE.to_string()));
        }

        let mut records = self.list();
        let Some(record) = records.iter_mut().find(|r| r.id == id) else {
            return Ok(false);
        };
        record.text = new_text.to_string();
        self.save(&records)?;

        tracing::debug!(id, "record edited");
        Ok(true)
    }

    /// Remove every completed record; returns how many were removed.
    pub fn clear_completed(&self) -> DomainResult<usize> {
        let mut records = self.list();
        let before = records.len();
        records.retain(Record::is_active);
        self.save(&records)?;

        let removed = before - records.len();
        tracing::debug!(removed, "completed records cleared");
        Ok(removed)
    }

    /// Move `dragged` immediately before or after `target`.
    pub fn reorder(&self, dragged: RecordId, target: RecordId, insert_before: bool) -> DomainResult<bool> {
        let mut records = self.list();
        if !move_record(&mut records, dragged, target, insert_before) {
            tracing::debug!(dragged, target, "reorder ignored");
            return Ok(false);
        }
        self.save(&records)?;

        tracing::debug!(dragged, target, insert_before, "record moved");
        Ok(true)
    }

    /// Creation-time id, bumped past the largest existing id when the clock
    /// has not moved on. Once ids reach `u64::MAX` the lowest free id is used.
    fn next_id(&self, records: &[Record]) -> RecordId {
        let now = self.clock.now_millis();
        match records.iter().map(|r| r.id).max() {
            Some(max) if max >= now => match max.checked_add(1) {
                Some(id) => id,
                None => lowest_free_id(records),
            },
            _ => now,
        }
    }
}

/// Smallest id not taken by any record. A collection holds fewer than
/// `u64::MAX` records, so a free id always exists.
fn lowest_free_id(records: &[Record]) -> RecordId {
    let mut taken: Vec<RecordId> = records.iter().map(|r| r.id).collect();
    taken.sort_unstable();
    taken.dedup();
    let mut candidate = 0;
    for id in taken {
        if id != candidate {
            break;
        }
        candidate += 1;
    }
    candidate
}
