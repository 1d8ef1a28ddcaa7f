//! Todo List View Component
//!
//! Displays the rendered rows with drag-and-drop reordering.
//! Uses leptos-dragdrop; the drag state itself lives in the dispatcher's
//! session, so every drag event becomes a command.

use dublin_todo_core::Command;
use leptos::prelude::*;
use leptos_dragdrop::Placement;

use crate::components::TodoRow;
use crate::context::AppContext;

/// Callbacks shared by every row's drag handlers
#[derive(Clone, Copy)]
pub struct RowDragCallbacks {
    pub on_start: Callback<u64>,
    pub on_over: Callback<u64>,
    pub on_leave: Callback<u64>,
    pub on_drop: Callback<(u64, Placement)>,
    pub on_end: Callback<()>,
}

/// The to-do list with DnD support
#[component]
pub fn TodoListView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let drag = RowDragCallbacks {
        on_start: Callback::new(move |id: u64| {
            ctx.dispatch(Command::DragStart { id });
        }),
        on_over: Callback::new(move |id: u64| ctx.drag_over(id)),
        on_leave: Callback::new(move |id: u64| {
            ctx.dispatch(Command::DragLeave { id });
        }),
        on_drop: Callback::new(move |(target, placement): (u64, Placement)| {
            tracing::debug!(target_id = target, ?placement, "drop");
            ctx.dispatch(Command::Drop { target, insert_before: placement.is_before() });
        }),
        on_end: Callback::new(move |_: ()| {
            ctx.dispatch(Command::DragEnd);
        }),
    };

    let rows = move || ctx.view.with(|v| v.rows.clone());
    let empty_message = move || ctx.view.with(|v| v.empty_message.clone());

    view! {
        <ul class="todo-list" id="todoList">
            {move || empty_message().map(|message| view! {
                <li class="empty-state"><p>{message}</p></li>
            })}

            <For
                each=rows
                // drag flags are left out so a row keeps its node while dragged
                key=|row| (row.id, row.text.clone(), row.completed, row.editing)
                children=move |row| view! { <TodoRow row=row drag=drag /> }
            />
        </ul>
    }
}
