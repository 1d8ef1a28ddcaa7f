//! Confirm Button Component
//!
//! Inline two-step button: the first click asks, the second acts.

use leptos::prelude::*;

/// Inline confirmation button
///
/// # Arguments
/// * `label` - text of the initial button
/// * `question` - prompt shown next to the confirm/cancel buttons
/// * `on_confirm` - runs when the user confirms
#[component]
pub fn ConfirmButton(
    #[prop(into)] label: String,
    #[prop(into)] question: String,
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (asking, set_asking) = signal(false);

    view! {
        <Show when=move || !asking.get()>
            <button class=button_class.clone() on:click=move |_| set_asking.set(true)>
                {label.clone()}
            </button>
        </Show>
        <Show when=move || asking.get()>
            <span class="confirm-prompt">
                <span class="confirm-text">{question.clone()}</span>
                <button
                    class="confirm-btn"
                    on:click=move |_| {
                        set_asking.set(false);
                        on_confirm.run(());
                    }
                >
                    "Yes"
                </button>
                <button class="cancel-btn" on:click=move |_| set_asking.set(false)>
                    "No"
                </button>
            </span>
        </Show>
    }
}
