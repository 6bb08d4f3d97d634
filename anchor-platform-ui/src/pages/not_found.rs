//! 404 Not Found page

use anchor_platform_core::nav::Section;
use leptos::*;
use leptos_router::*;

use crate::document::set_title;

#[component]
pub fn NotFound() -> impl IntoView {
    set_title(Section::NotFound);

    view! {
        <div class="result">
            <div class="result-icon">"✕"</div>
            <h2>"404 Not Found"</h2>
            <A href="/">"Go to Dashboard"</A>
        </div>
    }
}
