//! Theme preference and the injected theme store.
//!
//! DESIGN
//! ======
//! `ThemeStore` is created once in `App`, provided through context, and read
//! back with `use_theme_store()`. Components never touch the document or
//! storage directly; the store applies and persists through `util::theme_dom`.
//! The stored preference is read once, after mount, so server and client
//! render the same initial markup.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::util::theme_dom;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    /// Next theme in the cycle light -> dark -> system -> light.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::System,
            Theme::System => Theme::Light,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light theme",
            Theme::Dark => "Dark theme",
            Theme::System => "System theme",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme: {0}")]
pub struct ParseThemeError(pub String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            other => Err(ParseThemeError(other.to_owned())),
        }
    }
}

/// Session-wide theme service.
#[derive(Clone, Copy, Debug)]
pub struct ThemeStore {
    theme: RwSignal<Theme>,
}

impl ThemeStore {
    #[must_use]
    pub fn new(initial: Theme) -> Self {
        Self { theme: RwSignal::new(initial) }
    }

    /// Current theme, tracked.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    /// Current theme, untracked.
    #[must_use]
    pub fn current(&self) -> Theme {
        self.theme.get_untracked()
    }

    /// Load the persisted preference and apply it. Meant to run once on mount.
    pub fn restore(&self) {
        let theme = theme_dom::read_preference().unwrap_or_else(|| self.current());
        self.theme.set(theme);
        theme_dom::apply(theme);
    }

    pub fn set(&self, theme: Theme) {
        self.theme.set(theme);
        theme_dom::apply(theme);
        theme_dom::persist(theme);
    }

    /// Advance to the next theme and return it.
    pub fn cycle(&self) -> Theme {
        let next = self.current().next();
        self.set(next);
        log::debug!("theme switched to {next}");
        next
    }
}

/// Create the store and make it available to the component tree.
pub fn provide_theme_store() -> ThemeStore {
    let store = ThemeStore::new(Theme::default());
    provide_context(store);
    store
}

/// The store provided by `App`.
///
/// # Panics
///
/// Panics if called outside the tree where `provide_theme_store` ran.
#[must_use]
pub fn use_theme_store() -> ThemeStore {
    expect_context::<ThemeStore>()
}
