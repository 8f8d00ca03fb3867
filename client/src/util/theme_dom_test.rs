#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_preference_is_none_outside_browser() {
    assert_eq!(read_preference(), None);
}

#[test]
fn explicit_themes_force_a_scheme() {
    assert_eq!(forced_scheme(Theme::Light), Some("light"));
    assert_eq!(forced_scheme(Theme::Dark), Some("dark"));
}

#[test]
fn system_theme_defers_to_media_query() {
    assert_eq!(forced_scheme(Theme::System), None);
}

#[test]
fn apply_and_persist_are_noops_but_callable() {
    apply(Theme::Dark);
    persist(Theme::System);
}
