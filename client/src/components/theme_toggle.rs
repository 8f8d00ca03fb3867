//! Button cycling the theme light -> dark -> system.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use leptos::prelude::*;

use crate::state::theme::{Theme, use_theme_store};

fn theme_glyph(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "☀",
        Theme::Dark => "☾",
        Theme::System => "◐",
    }
}

fn toggle_label(theme: Theme) -> String {
    format!("{}, switch to {}", theme.label(), theme.next().as_str())
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let store = use_theme_store();

    view! {
        <button
            type="button"
            class="icon-btn theme-toggle"
            title=move || store.theme().label()
            aria-label=move || toggle_label(store.theme())
            on:click=move |_| {
                store.cycle();
            }
        >
            <span aria-hidden="true">{move || theme_glyph(store.theme())}</span>
        </button>
    }
}
