//! Navigation shell state: nav entries, active-link matching, mobile menu,
//! scrolled-header styling.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// One entry of the primary navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

impl NavItem {
    /// Exact path match only; `/projects/foo` does not activate `/projects`.
    #[must_use]
    pub fn is_active(&self, current_path: &str) -> bool {
        self.path == current_path
    }

    /// Link classes for the desktop bar.
    #[must_use]
    pub fn link_class(&self, current_path: &str) -> &'static str {
        if self.is_active(current_path) {
            "nav-link nav-link--active text-accent font-semibold"
        } else {
            "nav-link text-muted hover:text-accent"
        }
    }
}

pub static NAV_ITEMS: [NavItem; 4] = [
    NavItem { label: "Home", path: "/" },
    NavItem { label: "Projects", path: "/projects" },
    NavItem { label: "Blog", path: "/blog" },
    NavItem { label: "Contact", path: "/contact" },
];

/// The nav entry matching `current_path`, if any.
#[must_use]
pub fn active_item(current_path: &str) -> Option<&'static NavItem> {
    NAV_ITEMS.iter().find(|item| item.is_active(current_path))
}

/// Mobile menu open/closed state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    pub open: bool,
}

impl MobileMenu {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// A nav link was activated; the menu always closes.
    pub fn on_navigate(&mut self, _item: &NavItem) {
        self.close();
    }
}

/// Vertical scroll offset past which the header switches to its solid style.
pub const SCROLLED_OFFSET_PX: f64 = 10.0;

#[must_use]
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_OFFSET_PX
}

/// Header surface classes for the current scroll state.
#[must_use]
pub fn header_class(scrolled: bool) -> &'static str {
    if scrolled {
        "header--scrolled border-b border-subtle bg-surface/80 backdrop-blur"
    } else {
        "border-b border-transparent bg-transparent"
    }
}
