//! Pages
//!
//! Top-level section components, one per [`Section`].

pub mod dashboard;
pub mod not_found;
pub mod placeholder;

pub use dashboard::Dashboard;
pub use not_found::NotFound;
pub use placeholder::{AnchorMakers, Receipts, Settings};

use anchor_platform_core::nav::Section;
use leptos::*;

/// Render the component wired to a section
pub fn section_view(section: Section) -> View {
    match section {
        Section::Dashboard => view! { <Dashboard /> }.into_view(),
        Section::AnchorMakers => view! { <AnchorMakers /> }.into_view(),
        Section::Receipts => view! { <Receipts /> }.into_view(),
        Section::Settings => view! { <Settings /> }.into_view(),
        Section::NotFound => view! { <NotFound /> }.into_view(),
    }
}
