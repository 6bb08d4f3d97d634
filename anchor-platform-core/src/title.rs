//! Document titles

use crate::nav::Section;

pub const APP_NAME: &str = "Factom Anchor Platform";

/// Version shown in the dashboard footer
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Browser tab title for a section
pub fn page_title(section: Section) -> String {
    format!("{} | {}", section.name(), APP_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_title() {
        assert_eq!(
            page_title(Section::Dashboard),
            "Dashboard | Factom Anchor Platform"
        );
    }

    #[test]
    fn test_not_found_title() {
        assert_eq!(
            page_title(Section::NotFound),
            "404 Not Found | Factom Anchor Platform"
        );
    }

    #[test]
    fn test_placeholder_titles() {
        assert_eq!(
            page_title(Section::AnchorMakers),
            "Anchor Makers | Factom Anchor Platform"
        );
        assert_eq!(page_title(Section::Settings), "Settings | Factom Anchor Platform");
    }
}
