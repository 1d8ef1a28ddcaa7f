//! New Todo Form Component
//!
//! Text input + Add button; Enter submits.

use dublin_todo_core::{Command, NoticeTarget};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::StatusBanner;
use crate::context::AppContext;

/// Form for creating new to-do items
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (new_text, set_new_text) = signal(String::new());

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if ctx.dispatch(Command::Add { text: new_text.get_untracked() }) {
            set_new_text.set(String::new());
        }
    };

    view! {
        <form class="todo-input-section" on:submit=add_todo>
            <input
                type="text"
                id="todoInput"
                placeholder="Add a new to-do item..."
                prop:value=move || new_text.get()
                on:input=move |ev| {
                    if let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) {
                        set_new_text.set(input.value());
                    }
                }
            />
            <button type="submit" id="addBtn">"Add"</button>
        </form>
        <StatusBanner target=NoticeTarget::TodoList />
    }
}
