//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod loading;
pub mod nav;
pub mod statistic;
pub mod toast;

pub use loading::Loading;
pub use nav::Nav;
pub use statistic::Statistic;
pub use toast::Toast;
