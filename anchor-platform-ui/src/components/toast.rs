//! Toast Notification Component
//!
//! Shows transient error messages.

use leptos::*;

use crate::state::global::GlobalState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="toasts">
            {move || {
                state.error.get().map(|msg| view! {
                    <div class="toast-error" role="alert" on:click=move |_| state.clear_error()>
                        <span class="toast-icon">"✕"</span>
                        " "
                        <span>{msg}</span>
                    </div>
                })
            }}
        </div>
    }
}
