//! Domain Layer
//!
//! Contains the record entity and the small value types around it.
//! This layer has no storage or UI dependencies.

mod error;
mod record;
mod filter;
mod email;
mod clock;

pub use error::{DomainError, DomainResult};
pub use record::{Record, RecordId};
pub use filter::Filter;
pub use email::validate_email;
pub use clock::{Clock, FixedClock, SystemClock, CREATED_AT_FORMAT};
