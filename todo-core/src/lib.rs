//! Dublin To-Do Core
//!
//! Layered architecture:
//! - domain: Records, filters, email addresses and the clock
//! - repository: Key-value storage and the stores built on it
//! - view: Pure read path producing presentation rows
//! - commands: Drag session, UI session and the command dispatcher
//!
//! Nothing in this crate touches the DOM; the browser front end supplies a
//! `KeyValueStorage` backed by `localStorage` and forwards DOM events as
//! `Command`s.

pub mod config;
pub mod domain;
pub mod repository;
pub mod view;
pub mod commands;

pub use config::TodoConfig;
pub use domain::{Clock, DomainError, DomainResult, Filter, Record, RecordId, SystemClock};
pub use repository::{KeyValueStorage, MemoryStorage, RecordStore, SubscriberStore};
pub use view::{escape_html, render, ListView, RowView, Stats};
pub use commands::{Command, Dispatcher, DragSession, DragState, Notice, NoticeKind, NoticeTarget, Outcome, UiSession};
