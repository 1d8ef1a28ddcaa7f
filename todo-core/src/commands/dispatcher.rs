//! Command Dispatcher
//!
//! Applies one `Command` synchronously to the stores and renders the full
//! list afterwards. Handlers never interleave: the UI calls `dispatch` from
//! its event callbacks and each call runs read-modify-persist-render to
//! completion.

use std::rc::Rc;

use crate::config::TodoConfig;
use crate::domain::{Clock, DomainResult, RecordId, SystemClock};
use crate::repository::{KeyValueStorage, RecordStore, SubscriberStore};
use crate::view::{render, ListView};
use super::command::{Command, Notice, NoticeTarget, Outcome, SUBSCRIBED_MESSAGE};
use super::session::UiSession;

pub struct Dispatcher<S: KeyValueStorage> {
    records: RecordStore<S>,
    subscribers: SubscriberStore<S>,
    session: UiSession,
    config: TodoConfig,
}

impl<S: KeyValueStorage> Dispatcher<S> {
    pub fn new(storage: S, config: TodoConfig) -> Self {
        Self::with_clock(storage, config, Rc::new(SystemClock))
    }

    pub fn with_clock(storage: S, config: TodoConfig, clock: Rc<dyn Clock>) -> Self {
        Self {
            records: RecordStore::with_clock(storage.clone(), config.records_key.clone(), clock),
            subscribers: SubscriberStore::new(storage, config.subscribers_key.clone()),
            session: UiSession::default(),
            config,
        }
    }

    pub fn records(&self) -> &RecordStore<S> {
        &self.records
    }

    pub fn subscribers(&self) -> &SubscriberStore<S> {
        &self.subscribers
    }

    pub fn session(&self) -> &UiSession {
        &self.session
    }

    pub fn config(&self) -> &TodoConfig {
        &self.config
    }

    /// Render the current state without applying anything
    pub fn view(&self) -> ListView {
        render(&self.records.list(), self.session.filter, &self.session, &self.config)
    }

    pub fn dispatch(&mut self, command: Command) -> Outcome {
        tracing::debug!(?command, "dispatch");
        let notice = self.apply(command);
        if let Some(notice) = &notice {
            tracing::info!(target_line = ?notice.target, kind = ?notice.kind, text = %notice.text, "notice");
        }
        Outcome { view: self.view(), notice }
    }

    fn apply(&mut self, command: Command) -> Option<Notice> {
        use NoticeTarget::{Newsletter, TodoList};

        match command {
            Command::Refresh => None,
            Command::Add { text } => self.records.add(&text).err().map(|e| Notice::from_error(TodoList, &e)),
            Command::Remove { id } => {
                if self.session.editing == Some(id) {
                    self.session.editing = None;
                }
                report(TodoList, self.records.remove(id))
            }
            Command::Toggle { id } => report(TodoList, self.records.toggle(id)),
            Command::StartEdit { id } => {
                if self.records.find(id).is_some() {
                    self.session.editing = Some(id);
                    // an edited row is not draggable
                    if self.session.drag.source() == Some(id) {
                        self.session.drag.cancel();
                    }
                }
                None
            }
            Command::CommitEdit { id, text } => self.commit_edit(id, &text),
            Command::CancelEdit => {
                self.session.editing = None;
                None
            }
            Command::ClearCompleted => report(TodoList, self.records.clear_completed()),
            Command::SetFilter(filter) => {
                self.session.filter = filter;
                None
            }
            Command::DragStart { id } => {
                if !self.session.is_editing(id) {
                    self.session.drag.start(id);
                }
                None
            }
            Command::DragEnter { id } => {
                self.session.drag.hover(id);
                None
            }
            Command::DragLeave { id } => {
                self.session.drag.leave(id);
                None
            }
            Command::Drop { target, insert_before } => {
                let request = self.session.drag.drop_on(target, insert_before)?;
                report(TodoList, self.records.reorder(request.dragged, request.target, request.insert_before))
            }
            Command::DragEnd => {
                self.session.drag.cancel();
                None
            }
            Command::Subscribe { email } => match self.subscribers.subscribe(&email) {
                Ok(_) => Some(Notice::success(Newsletter, SUBSCRIBED_MESSAGE)),
                Err(e) => Some(Notice::from_error(Newsletter, &e)),
            },
        }
    }

    /// Blank text keeps the row in edit mode; unchanged text leaves it
    /// without a write.
    fn commit_edit(&mut self, id: RecordId, text: &str) -> Option<Notice> {
        // blur can fire after Escape already closed the editor
        if !self.session.is_editing(id) {
            return None;
        }
        let Some(current) = self.records.find(id) else {
            self.session.editing = None;
            return None;
        };
        if !text.trim().is_empty() && text.trim() == current.text {
            self.session.editing = None;
            return None;
        }

        match self.records.edit(id, text) {
            Ok(_) => {
                self.session.editing = None;
                None
            }
            Err(e) => Some(Notice::from_error(NoticeTarget::TodoList, &e)),
        }
    }
}

fn report<T>(target: NoticeTarget, result: DomainResult<T>) -> Option<Notice> {
    result.err().map(|e| {
        tracing::warn!(error = %e, "command not applied");
        Notice::from_error(target, &e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{DragState, NoticeKind, STORAGE_FAILED_MESSAGE};
    use crate::domain::{FixedClock, Filter, Record};
    use crate::repository::{MemoryStorage, EMPTY_EDIT_MESSAGE, EMPTY_TEXT_MESSAGE, ALREADY_SUBSCRIBED_MESSAGE};

    fn setup() -> (Dispatcher<MemoryStorage>, MemoryStorage) {
        let storage = MemoryStorage::new();
        let dispatcher = Dispatcher::with_clock(storage.clone(), TodoConfig::default(), Rc::new(FixedClock::new(100)));
        (dispatcher, storage)
    }

    fn seeded(ids: &[RecordId]) -> (Dispatcher<MemoryStorage>, MemoryStorage) {
        let (dispatcher, storage) = setup();
        let records: Vec<Record> = ids.iter().map(|&id| Record::new(id, format!("Item {id}"), "")).collect();
        dispatcher.records().save(&records).unwrap();
        (dispatcher, storage)
    }

    fn add(text: &str) -> Command {
        Command::Add { text: text.to_string() }
    }

    #[test]
    fn test_add_renders_new_row() {
        let (mut d, _) = setup();
        let outcome = d.dispatch(add("Phoenix Park"));
        assert_eq!(outcome.notice, None);
        assert_eq!(outcome.view.rows.len(), 1);
        assert_eq!(outcome.view.rows[0].text, "Phoenix Park");
        assert_eq!(outcome.view.stats.total, 1);
    }

    #[test]
    fn test_add_blank_warns() {
        let (mut d, storage) = setup();
        let outcome = d.dispatch(add("   "));
        let notice = outcome.notice.unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.target, NoticeTarget::TodoList);
        assert_eq!(notice.text, EMPTY_TEXT_MESSAGE);
        assert!(outcome.view.is_empty());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_toggle_and_filter() {
        let (mut d, _) = seeded(&[1, 2, 3]);
        d.dispatch(Command::Toggle { id: 2 });

        let outcome = d.dispatch(Command::SetFilter(Filter::Completed));
        assert_eq!(outcome.view.ids(), vec![2]);
        assert_eq!(outcome.view.filter, Filter::Completed);

        // filter sticks across mutations
        let outcome = d.dispatch(Command::Toggle { id: 3 });
        assert_eq!(outcome.view.ids(), vec![2, 3]);
        assert_eq!(outcome.view.stats.completed, 2);
    }

    #[test]
    fn test_clear_completed() {
        let (mut d, _) = seeded(&[1, 2, 3]);
        d.dispatch(Command::Toggle { id: 1 });
        d.dispatch(Command::Toggle { id: 3 });
        let outcome = d.dispatch(Command::ClearCompleted);
        assert_eq!(outcome.view.ids(), vec![2]);
        assert_eq!(outcome.view.stats.completed, 0);
    }

    #[test]
    fn test_edit_flow() {
        let (mut d, _) = seeded(&[1, 2]);

        let outcome = d.dispatch(Command::StartEdit { id: 2 });
        assert!(outcome.view.row(2).unwrap().editing);

        let outcome = d.dispatch(Command::CommitEdit { id: 2, text: "  ".to_string() });
        assert_eq!(outcome.notice.unwrap().text, EMPTY_EDIT_MESSAGE);
        assert!(outcome.view.row(2).unwrap().editing, "blank keeps edit mode");
        assert_eq!(outcome.view.row(2).unwrap().text, "Item 2");

        let outcome = d.dispatch(Command::CommitEdit { id: 2, text: "Howth cliff walk ".to_string() });
        assert_eq!(outcome.notice, None);
        let row = outcome.view.row(2).unwrap();
        assert!(!row.editing);
        assert_eq!(row.text, "Howth cliff walk");
        assert_eq!(outcome.view.ids(), vec![1, 2]);
    }

    #[test]
    fn test_unchanged_edit_does_not_write() {
        let (mut d, storage) = seeded(&[1]);
        d.dispatch(Command::StartEdit { id: 1 });
        storage.set_read_only(true);

        let outcome = d.dispatch(Command::CommitEdit { id: 1, text: "Item 1".to_string() });
        assert_eq!(outcome.notice, None);
        assert!(d.session().editing.is_none());
    }

    #[test]
    fn test_cancel_edit_and_unknown_id() {
        let (mut d, _) = seeded(&[1]);
        d.dispatch(Command::StartEdit { id: 9 });
        assert!(d.session().editing.is_none());

        d.dispatch(Command::StartEdit { id: 1 });
        let outcome = d.dispatch(Command::CancelEdit);
        assert!(!outcome.view.row(1).unwrap().editing);
    }

    #[test]
    fn test_commit_after_cancel_is_ignored() {
        let (mut d, _) = seeded(&[1]);
        d.dispatch(Command::StartEdit { id: 1 });
        d.dispatch(Command::CancelEdit);

        let outcome = d.dispatch(Command::CommitEdit { id: 1, text: "Temple Bar".to_string() });
        assert_eq!(outcome.notice, None);
        assert_eq!(outcome.view.row(1).unwrap().text, "Item 1");
        assert_eq!(d.records().find(1).unwrap().text, "Item 1");
    }

    #[test]
    fn test_remove_ends_edit_of_that_row() {
        let (mut d, _) = seeded(&[1, 2]);
        d.dispatch(Command::StartEdit { id: 1 });
        let outcome = d.dispatch(Command::Remove { id: 1 });
        assert_eq!(outcome.view.ids(), vec![2]);
        assert!(d.session().editing.is_none());
    }

    #[test]
    fn test_drag_and_drop_reorders() {
        let (mut d, _) = seeded(&[1, 2, 3]);

        let outcome = d.dispatch(Command::DragStart { id: 1 });
        assert!(outcome.view.row(1).unwrap().dragging);

        let outcome = d.dispatch(Command::DragEnter { id: 3 });
        assert!(outcome.view.row(3).unwrap().drag_over);

        let outcome = d.dispatch(Command::Drop { target: 3, insert_before: false });
        assert_eq!(outcome.view.ids(), vec![2, 3, 1]);
        assert_eq!(d.session().drag.state(), DragState::Idle);
        assert!(outcome.view.rows.iter().all(|r| !r.dragging && !r.drag_over));

        // dragend after a drop is harmless
        let outcome = d.dispatch(Command::DragEnd);
        assert_eq!(outcome.view.ids(), vec![2, 3, 1]);
    }

    #[test]
    fn test_drop_without_drag_or_on_self_does_nothing() {
        let (mut d, _) = seeded(&[1, 2]);
        assert_eq!(d.dispatch(Command::Drop { target: 2, insert_before: true }).view.ids(), vec![1, 2]);

        d.dispatch(Command::DragStart { id: 2 });
        assert_eq!(d.dispatch(Command::Drop { target: 2, insert_before: true }).view.ids(), vec![1, 2]);
    }

    #[test]
    fn test_cancelled_drag_leaves_order() {
        let (mut d, _) = seeded(&[1, 2]);
        d.dispatch(Command::DragStart { id: 1 });
        d.dispatch(Command::DragEnter { id: 2 });
        d.dispatch(Command::DragLeave { id: 2 });
        let outcome = d.dispatch(Command::DragEnd);
        assert_eq!(outcome.view.ids(), vec![1, 2]);
        assert!(!d.session().drag.is_active());
    }

    #[test]
    fn test_editing_row_cannot_start_drag() {
        let (mut d, _) = seeded(&[1, 2]);
        d.dispatch(Command::StartEdit { id: 1 });
        d.dispatch(Command::DragStart { id: 1 });
        assert!(!d.session().drag.is_active());
    }

    #[test]
    fn test_subscribe() {
        let (mut d, _) = setup();

        let notice = d.dispatch(Command::Subscribe { email: "not-an-email".to_string() }).notice.unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.target, NoticeTarget::Newsletter);

        let notice = d.dispatch(Command::Subscribe { email: "user@example.com".to_string() }).notice.unwrap();
        assert_eq!(notice, Notice::success(NoticeTarget::Newsletter, SUBSCRIBED_MESSAGE));
        assert!(notice.is_transient());

        let notice = d.dispatch(Command::Subscribe { email: "user@example.com".to_string() }).notice.unwrap();
        assert_eq!(notice.text, ALREADY_SUBSCRIBED_MESSAGE);
        assert!(!notice.is_transient());
        assert_eq!(d.subscribers().list().len(), 1);
    }

    #[test]
    fn test_storage_failure_becomes_notice() {
        let (mut d, storage) = seeded(&[1]);
        storage.set_read_only(true);
        let outcome = d.dispatch(Command::Toggle { id: 1 });
        assert_eq!(outcome.notice.unwrap().text, STORAGE_FAILED_MESSAGE);
        assert!(!outcome.view.row(1).unwrap().completed);
    }

    #[test]
    fn test_refresh_reads_storage_written_elsewhere() {
        let (mut d, storage) = setup();
        storage.set_item("dublinTodos", r#"[{"id":5,"text":"x","completed":false,"createdAt":""}]"#).unwrap();
        assert_eq!(d.dispatch(Command::Refresh).view.ids(), vec![5]);
    }
}
