//! Theme application and persistence in the browser.
//!
//! Writes `data-theme` (`light` or `dark`) on `<html>` for an explicit choice
//! and stores the user's three-way preference in `localStorage`. `System`
//! removes the attribute so the stylesheet's `prefers-color-scheme` rule
//! decides, which keeps following OS changes mid-session.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR paths no-op to keep
//! server rendering deterministic.

#[cfg(test)]
#[path = "theme_dom_test.rs"]
mod theme_dom_test;

use crate::state::theme::Theme;
use crate::util::storage::StoredPreference;

const THEME_PREFERENCE: StoredPreference<Theme> = StoredPreference::new("folio_theme");

/// Read the stored preference, if any.
pub fn read_preference() -> Option<Theme> {
    THEME_PREFERENCE.load()
}

/// Persist the preference.
pub fn persist(theme: Theme) {
    THEME_PREFERENCE.save(&theme);
}

/// Value for the `data-theme` attribute; `None` leaves it to the OS.
#[must_use]
pub fn forced_scheme(theme: Theme) -> Option<&'static str> {
    match theme {
        Theme::Light => Some("light"),
        Theme::Dark => Some("dark"),
        Theme::System => None,
    }
}

/// Apply the theme attributes on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = match forced_scheme(theme) {
                Some(value) => el.set_attribute("data-theme", value),
                None => el.remove_attribute("data-theme"),
            };
            let _ = el.set_attribute("data-theme-preference", theme.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}
