//! Status line for one notice target.

use dublin_todo_core::NoticeTarget;
use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn StatusBanner(target: NoticeTarget) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let notice = ctx.notice(target);

    view! {
        {move || notice.get().map(|n| view! {
            <div class=format!("status-message {}", n.kind.class_name()) role="status">
                {n.text}
            </div>
        })}
    }
}
