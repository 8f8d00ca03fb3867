use super::*;

#[test]
fn each_theme_has_distinct_glyph() {
    assert_ne!(theme_glyph(Theme::Light), theme_glyph(Theme::Dark));
    assert_ne!(theme_glyph(Theme::Dark), theme_glyph(Theme::System));
    assert_ne!(theme_glyph(Theme::System), theme_glyph(Theme::Light));
}

#[test]
fn toggle_label_names_next_theme() {
    assert_eq!(toggle_label(Theme::Light), "Light theme, switch to dark");
    assert_eq!(toggle_label(Theme::System), "System theme, switch to light");
}
