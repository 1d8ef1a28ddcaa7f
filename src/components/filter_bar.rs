//! Filter Bar Component
//!
//! All / Active / Completed buttons. The filter only affects rendering.

use dublin_todo_core::{Command, Filter};
use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="filter-bar">
            {Filter::ALL.iter().map(|&filter| {
                let is_active = move || ctx.view.with(|v| v.filter == filter);
                view! {
                    <button
                        class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                        data-filter=filter.as_str()
                        on:click=move |_| {
                            ctx.dispatch(Command::SetFilter(filter));
                        }
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
