//! Navigation Component
//!
//! Header menu with the brand mark and the section links. The highlighted
//! entry follows the shell's menu selection, not the current route.

use anchor_platform_core::nav::{MenuKey, MenuSelection, MENU};
use leptos::*;
use leptos_router::*;

/// Navigation header component
#[component]
pub fn Nav(selection: RwSignal<MenuSelection>) -> impl IntoView {
    view! {
        <header class="header">
            <ul class="menu" role="menu">
                // Brand mark
                <li
                    class="menu-item menu-no-hover"
                    on:click=move |_| selection.update(|s| s.on_click(MenuKey::Brand))
                >
                    <A href="/">"Anchor Platform"</A>
                </li>

                {MENU
                    .iter()
                    .map(|entry| view! {
                        <NavItem menu_key=entry.key label=entry.label href=entry.href selection=selection />
                    })
                    .collect_view()}
            </ul>
        </header>
    }
}

/// Individual navigation entry
#[component]
fn NavItem(
    menu_key: MenuKey,
    label: &'static str,
    href: &'static str,
    selection: RwSignal<MenuSelection>,
) -> impl IntoView {
    let class = move || {
        if selection.get().is_selected(menu_key) {
            "menu-item selected"
        } else {
            "menu-item"
        }
    };

    view! {
        <li
            class=class
            data-key=menu_key.key()
            on:click=move |_| selection.update(|s| s.on_click(menu_key))
        >
            <A href=href>{label}</A>
        </li>
    }
}
