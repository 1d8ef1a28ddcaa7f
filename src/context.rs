//! Application Context
//!
//! Shared state provided via Leptos Context API. Components never touch the
//! stores directly: they send a `Command` through `dispatch`, which applies
//! it and replaces the rendered view.

use dublin_todo_core::{Command, Dispatcher, ListView, Notice, NoticeTarget, RecordId};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::storage::BrowserStorage;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Single writer for the record collection; not `Send`, so kept local
    dispatcher: StoredValue<Dispatcher<BrowserStorage>, LocalStorage>,
    /// Last rendered list - read
    pub view: ReadSignal<ListView>,
    /// Last rendered list - write
    set_view: WriteSignal<ListView>,
    pub todo_notice: RwSignal<Option<Notice>>,
    pub newsletter_notice: RwSignal<Option<Notice>>,
    notice_timeout_ms: u32,
    pub edit_max_len: usize,
}

impl AppContext {
    pub fn new(dispatcher: Dispatcher<BrowserStorage>) -> Self {
        let notice_timeout_ms = dispatcher.config().notice_timeout_ms;
        let edit_max_len = dispatcher.config().edit_max_len;
        let (view, set_view) = signal(dispatcher.view());
        Self {
            dispatcher: StoredValue::new_local(dispatcher),
            view,
            set_view,
            todo_notice: RwSignal::new(None),
            newsletter_notice: RwSignal::new(None),
            notice_timeout_ms,
            edit_max_len,
        }
    }

    /// Apply a command and publish the new view.
    /// Returns `false` when the command was rejected with an error notice.
    pub fn dispatch(&self, command: Command) -> bool {
        let clears_todo_notice = !matches!(command, Command::Subscribe { .. });
        let Some(outcome) = self.dispatcher.try_update_value(|d| d.dispatch(command)) else {
            tracing::error!("dispatcher disposed");
            return false;
        };
        self.set_view.set(outcome.view);

        match outcome.notice {
            Some(notice) => {
                let applied = notice.is_transient();
                self.show_notice(notice);
                applied
            }
            None => {
                if clears_todo_notice {
                    self.todo_notice.set(None);
                }
                true
            }
        }
    }

    /// dragover repeats while the pointer rests on a row; only the first
    /// one per row is dispatched, and none while no row is being dragged
    /// (files dragged in from outside the page).
    pub fn drag_over(&self, id: RecordId) {
        if self.view.with_untracked(|v| v.accepts_hover(id)) {
            self.dispatch(Command::DragEnter { id });
        }
    }

    pub fn notice(&self, target: NoticeTarget) -> RwSignal<Option<Notice>> {
        match target {
            NoticeTarget::TodoList => self.todo_notice,
            NoticeTarget::Newsletter => self.newsletter_notice,
        }
    }

    fn show_notice(&self, notice: Notice) {
        let slot = self.notice(notice.target);
        slot.set(Some(notice.clone()));

        if notice.is_transient() {
            let timeout = self.notice_timeout_ms;
            spawn_local(async move {
                TimeoutFuture::new(timeout).await;
                // leave it alone if a newer notice replaced it
                slot.update(|current| {
                    if current.as_ref() == Some(&notice) {
                        *current = None;
                    }
                });
            });
        }
    }
}
