//! App Root Component
//!
//! Boot spinner, then the navigation shell with routing and global providers.

use anchor_platform_core::nav::{resolve, MenuSelection};
use anchor_platform_core::{BootState, APP_VERSION};
use gloo_timers::callback::Timeout;
use leptos::*;
use leptos_router::*;

use crate::components::{Loading, Nav, Toast};
use crate::document::scroll_to_top;
use crate::pages::section_view;
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    let boot = create_rw_signal(BootState::default());

    // Flip to ready once the first render has been committed
    Timeout::new(0, move || {
        let _ = boot.try_update(|state| *state = state.mounted());
    })
    .forget();

    view! {
        {move || {
            if boot.get().shows_spinner() {
                view! { <Loading /> }.into_view()
            } else {
                view! {
                    <Router>
                        <Shell />
                    </Router>
                }.into_view()
            }
        }}
    }
}

/// Header, routed content, footer
#[component]
fn Shell() -> impl IntoView {
    let location = use_location();

    // Seeded from the entry URL; afterwards only menu clicks move it
    let selection = create_rw_signal(MenuSelection::from_path(
        &location.pathname.get_untracked(),
    ));

    // Each navigation starts at the top of the page
    create_effect(move |_| {
        location.pathname.track();
        scroll_to_top();
    });

    view! {
        <div class="layout">
            // Navigation header
            <Nav selection=selection />

            // Main content area
            <main class="content">
                {move || section_view(resolve(&location.pathname.get()))}
            </main>

            <Footer />

            // Toast notifications
            <Toast />
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            {format!("Version: {}", APP_VERSION)}
        </footer>
    }
}
