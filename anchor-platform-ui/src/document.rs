//! Browser document helpers

use anchor_platform_core::nav::Section;
use anchor_platform_core::page_title;

/// Set the browser tab title for a section
pub fn set_title(section: Section) {
    leptos::document().set_title(&page_title(section));
}

pub fn scroll_to_top() {
    leptos::window().scroll_to_with_x_and_y(0.0, 0.0);
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_not_found_title_replaces_previous_title() {
        leptos::document().set_title("something else");
        set_title(Section::NotFound);
        assert_eq!(
            leptos::document().title(),
            "404 Not Found | Factom Anchor Platform"
        );
    }

    #[wasm_bindgen_test]
    fn test_scroll_to_top() {
        let body = leptos::document().body().unwrap();
        body.style().set_property("height", "5000px").unwrap();
        leptos::window().scroll_to_with_x_and_y(0.0, 1200.0);

        scroll_to_top();

        assert_eq!(leptos::window().scroll_y().unwrap(), 0.0);
        body.style().remove_property("height").unwrap();
    }

    #[wasm_bindgen_test]
    fn test_dashboard_title() {
        set_title(Section::Dashboard);
        assert_eq!(
            leptos::document().title(),
            "Dashboard | Factom Anchor Platform"
        );
    }
}
