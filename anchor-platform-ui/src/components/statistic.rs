//! Statistic Component
//!
//! A titled number that shows a placeholder until its value arrives.

use leptos::*;

/// Shown while a value is still loading
pub const PENDING: &str = "…";

pub fn display_value(value: Option<u64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| PENDING.to_string())
}

#[component]
pub fn Statistic(
    title: &'static str,
    #[prop(into)]
    value: Signal<Option<u64>>,
) -> impl IntoView {
    view! {
        <div class="statistic">
            <div class="statistic-title">{title}</div>
            <div class="statistic-value">{move || display_value(value.get())}</div>
        </div>
    }
}
