//! Dublin To-Do App
//!
//! Root component: opens storage, builds the dispatcher and lays out the
//! to-do panel next to the newsletter signup.

use dublin_todo_core::{Command, Dispatcher, TodoConfig};
use leptos::prelude::*;

use crate::components::{ConfirmButton, FilterBar, NewTodoForm, NewsletterForm, StatsBar, TodoListView};
use crate::context::AppContext;
use crate::storage::BrowserStorage;

#[component]
pub fn App(config: TodoConfig) -> impl IntoView {
    let storage = BrowserStorage::open();
    let persistent = storage.is_persistent();
    let dispatcher = Dispatcher::new(storage, config);
    tracing::info!(
        records = dispatcher.records().list().len(),
        persistent,
        "to-do widget started"
    );

    let ctx = AppContext::new(dispatcher);
    provide_context(ctx);

    let has_completed = move || ctx.view.with(|v| v.stats.completed > 0);

    view! {
        <section class="todo-section" id="todo">
            <h2>"My Dublin To-Do List"</h2>
            <NewTodoForm />
            <FilterBar />
            <TodoListView />
            <div class="todo-footer">
                <StatsBar />
                <Show when=has_completed>
                    <ConfirmButton
                        label="Clear Completed"
                        question="Delete all completed items?"
                        button_class="clear-completed-btn"
                        on_confirm=Callback::new(move |_: ()| {
                            ctx.dispatch(Command::ClearCompleted);
                        })
                    />
                </Show>
            </div>
        </section>

        <section class="newsletter-section" id="newsletter">
            <h2>"Stay Updated on Dublin"</h2>
            <NewsletterForm />
        </section>
    }
}
