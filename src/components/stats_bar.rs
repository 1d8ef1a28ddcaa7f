//! Totals shown under the list.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn StatsBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let total = move || ctx.view.with(|v| v.stats.total);
    let completed = move || ctx.view.with(|v| v.stats.completed);

    view! {
        <div class="todo-stats">
            <span>"Total: " <span id="totalItems">{total}</span></span>
            <span>"Completed: " <span id="completedItems">{completed}</span></span>
        </div>
    }
}
