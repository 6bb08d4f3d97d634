//! Navigation
//!
//! Declarative route table and the header menu selection.
//!
//! The menu selection only changes through two transitions: it is derived
//! from the browser path once when the shell mounts, and it follows menu
//! clicks afterwards. Browser history navigation does not re-derive it.

/// Content sections the shell can render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Dashboard,
    AnchorMakers,
    Receipts,
    Settings,
    NotFound,
}

impl Section {
    /// Human readable section name
    pub fn name(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::AnchorMakers => "Anchor Makers",
            Section::Receipts => "Receipts",
            Section::Settings => "Settings",
            Section::NotFound => "404 Not Found",
        }
    }
}

/// A client-side route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub section: Section,
}

/// Exact-match routes. Anything not listed renders [`Section::NotFound`].
pub const ROUTES: &[Route] = &[
    Route {
        path: "/",
        section: Section::Dashboard,
    },
    Route {
        path: "/dashboard",
        section: Section::Dashboard,
    },
    Route {
        path: "/anchormakers",
        section: Section::AnchorMakers,
    },
    Route {
        path: "/receipts",
        section: Section::Receipts,
    },
    Route {
        path: "/settings",
        section: Section::Settings,
    },
];

/// Resolve a browser path to the section it renders
pub fn resolve(path: &str) -> Section {
    let path = normalize(path);
    ROUTES
        .iter()
        .find(|route| route.path == path)
        .map(|route| route.section)
        .unwrap_or(Section::NotFound)
}

fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// Header menu keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuKey {
    /// The brand mark on the left of the header
    Brand,
    Dashboard,
    AnchorMakers,
    Receipts,
    Settings,
}

impl MenuKey {
    /// Wire key of the menu entry
    pub const fn key(self) -> &'static str {
        match self {
            MenuKey::Brand => "logo",
            MenuKey::Dashboard => "/dashboard",
            MenuKey::AnchorMakers => "/anchormakers",
            MenuKey::Receipts => "/receipts",
            MenuKey::Settings => "/settings",
        }
    }
}

/// A navigation entry of the header menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub key: MenuKey,
    pub label: &'static str,
    pub href: &'static str,
}

/// Navigation entries in display order (the brand mark is rendered separately)
pub const MENU: &[MenuEntry] = &[
    MenuEntry {
        key: MenuKey::Dashboard,
        label: "Dashboard",
        href: "/",
    },
    MenuEntry {
        key: MenuKey::AnchorMakers,
        label: "Anchor Makers",
        href: "/anchormakers",
    },
    MenuEntry {
        key: MenuKey::Receipts,
        label: "Receipts",
        href: "/receipts",
    },
    MenuEntry {
        key: MenuKey::Settings,
        label: "Settings",
        href: "/settings",
    },
];

/// Path fragments checked at mount time, first match wins
const DETECTION: &[(&str, MenuKey)] = &[
    ("dashboard", MenuKey::Dashboard),
    ("anchormakers", MenuKey::AnchorMakers),
    ("receipts", MenuKey::Receipts),
    ("settings", MenuKey::Settings),
];

/// Currently highlighted menu entry, if any. Never holds [`MenuKey::Brand`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuSelection(Option<MenuKey>);

impl MenuSelection {
    /// Derive the selection from the path the shell was mounted at
    pub fn from_path(path: &str) -> Self {
        if path.is_empty() || path == "/" {
            return Self(Some(MenuKey::Dashboard));
        }

        Self(
            DETECTION
                .iter()
                .find(|(fragment, _)| path.contains(fragment))
                .map(|(_, key)| *key),
        )
    }

    /// Apply a click on a menu entry
    pub fn on_click(&mut self, key: MenuKey) {
        self.0 = match key {
            MenuKey::Brand => Some(MenuKey::Dashboard),
            other => Some(other),
        };
    }

    pub fn selected(&self) -> Option<MenuKey> {
        self.0
    }

    pub fn is_selected(&self, key: MenuKey) -> bool {
        self.0 == Some(key)
    }
}
