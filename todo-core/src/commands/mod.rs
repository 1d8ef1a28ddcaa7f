//! Commands Layer
//!
//! Turns user actions into store mutations followed by a render pass.

mod command;
mod dispatcher;
mod drag;
mod session;

pub use command::{Command, Notice, NoticeKind, NoticeTarget, Outcome, STORAGE_FAILED_MESSAGE, SUBSCRIBED_MESSAGE};
pub use dispatcher::Dispatcher;
pub use drag::{DragSession, DragState, ReorderRequest};
pub use session::UiSession;
