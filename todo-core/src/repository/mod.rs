//! Repository Layer
//!
//! Storage abstraction and the stores built on it.

mod traits;
mod memory;
mod record_store;
mod record_positioning;
mod subscriber_store;


pub use traits::KeyValueStorage;
pub use memory::MemoryStorage;
pub use record_store::{RecordStore, EMPTY_EDIT_MESSAGE, EMPTY_TEXT_MESSAGE};
pub use record_positioning::move_record;
pub use subscriber_store::{SubscriberStore, ALREADY_SUBSCRIBED_MESSAGE};
