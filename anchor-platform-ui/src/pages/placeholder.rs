//! Sections that are routed but not built yet.
//!
//! Each has its own component so it can be replaced independently.

use anchor_platform_core::nav::Section;
use leptos::*;

use crate::document::set_title;

#[component]
fn Placeholder(section: Section) -> impl IntoView {
    set_title(section);

    view! {
        <div class="placeholder">
            <h2>{section.name()}</h2>
            <p>"This section is not available yet."</p>
        </div>
    }
}

#[component]
pub fn AnchorMakers() -> impl IntoView {
    view! { <Placeholder section=Section::AnchorMakers /> }
}

#[component]
pub fn Receipts() -> impl IntoView {
    view! { <Placeholder section=Section::Receipts /> }
}

#[component]
pub fn Settings() -> impl IntoView {
    view! { <Placeholder section=Section::Settings /> }
}
