//! Todo Row Component
//!
//! A single row: checkbox, label (double-click to edit), delete button.

use dublin_todo_core::{Command, RowView};
use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::todo_list_view::RowDragCallbacks;
use crate::context::AppContext;

/// A single to-do row
#[component]
pub fn TodoRow(row: RowView, drag: RowDragCallbacks) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = row.id;
    // drag highlight changes without recreating the row
    let row_class = move || ctx.view.with(|v| v.row(id).map(|r| r.class_name()).unwrap_or_default());

    view! {
        <li
            class=row_class
            draggable=if row.draggable { "true" } else { "false" }
            data-id=id.to_string()
            on:dragstart=make_on_dragstart(id, drag.on_start)
            on:dragover=make_on_dragover(id, drag.on_over)
            on:dragleave=make_on_dragleave(id, drag.on_leave)
            on:drop=make_on_drop(id, drag.on_drop)
            on:dragend=make_on_dragend(drag.on_end)
        >
            <input
                type="checkbox"
                class="todo-checkbox"
                prop:checked=row.completed
                on:change=move |_| {
                    ctx.dispatch(Command::Toggle { id });
                }
            />

            {if row.editing {
                view! { <EditInput id=id text=row.text.clone() max_len=ctx.edit_max_len /> }.into_any()
            } else {
                view! {
                    <span
                        class="todo-text"
                        title="Double-click to edit"
                        style="cursor: pointer;"
                        inner_html=row.label_html.clone()
                        on:dblclick=move |_| {
                            ctx.dispatch(Command::StartEdit { id });
                        }
                    />
                }.into_any()
            }}

            <button class="todo-delete" on:click=move |_| {
                ctx.dispatch(Command::Remove { id });
            }>"Delete"</button>
        </li>
    }
}

/// Inline edit input: Enter or blur saves, Escape cancels
#[component]
fn EditInput(id: u64, text: String, max_len: usize) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Focus and select on mount
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
            input.select();
        }
    });

    let commit = move || {
        let text = input_ref.get_untracked().map(|input| input.value()).unwrap_or_default();
        ctx.dispatch(Command::CommitEdit { id, text });
    };

    view! {
        <input
            type="text"
            class="todo-edit-input"
            node_ref=input_ref
            prop:value=text
            maxlength=max_len.to_string()
            on:keydown=move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                "Enter" => commit(),
                "Escape" => {
                    ctx.dispatch(Command::CancelEdit);
                }
                _ => {}
            }
            on:blur=move |_| commit()
        />
    }
}
