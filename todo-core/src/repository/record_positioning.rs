//! Record Positioning
//!
//! Order is the sequence itself; there is no stored rank to renumber.

use crate::domain::{Record, RecordId};

/// Move `dragged` next to `target`.
///
/// `new_index = target_index + (insert_before ? 0 : 1)`, minus one when the
/// dragged record sits before that slot (its removal shifts the slot left).
/// Returns `false` without touching `records` when either id is missing or
/// both are the same record.
pub fn move_record(records: &mut Vec<Record>, dragged: RecordId, target: RecordId, insert_before: bool) -> bool {
    if dragged == target {
        return false;
    }
    let Some(dragged_index) = records.iter().position(|r| r.id == dragged) else {
        return false;
    };
    let Some(target_index) = records.iter().position(|r| r.id == target) else {
        return false;
    };

    let mut new_index = target_index + usize::from(!insert_before);
    if dragged_index < new_index {
        new_index -= 1;
    }

    let moved = records.remove(dragged_index);
    records.insert(new_index, moved);
    true
}
