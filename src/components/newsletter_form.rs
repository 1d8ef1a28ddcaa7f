//! Newsletter Form Component
//!
//! Email signup stored next to the to-do list.

use dublin_todo_core::{Command, NoticeTarget};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::StatusBanner;
use crate::context::AppContext;

#[component]
pub fn NewsletterForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (email, set_email) = signal(String::new());

    let subscribe = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if ctx.dispatch(Command::Subscribe { email: email.get_untracked() }) {
            set_email.set(String::new());
        }
    };

    view! {
        <form class="newsletter-form" id="newsletterForm" on:submit=subscribe>
            <input
                type="email"
                id="emailInput"
                placeholder="Enter your email"
                prop:value=move || email.get()
                on:input=move |ev| {
                    if let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) {
                        set_email.set(input.value());
                    }
                }
            />
            <button type="submit">"Subscribe"</button>
        </form>
        <div id="formMessage">
            <StatusBanner target=NoticeTarget::Newsletter />
        </div>
    }
}
