use super::*;

#[test]
fn missing_preference_is_light() {
    assert_eq!(Theme::from_stored(None), Theme::Light);
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn stored_values_round_trip_through_as_str() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::from_stored(Some(theme.as_str())), theme);
    }
}

#[test]
fn unknown_value_falls_back_to_light() {
    assert_eq!(Theme::from_stored(Some("sepia")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("")), Theme::Light);
}

#[test]
fn flip_alternates() {
    assert_eq!(Theme::Light.flipped(), Theme::Dark);
    assert_eq!(Theme::Dark.flipped(), Theme::Light);
    assert_eq!(Theme::Light.flipped().flipped(), Theme::Light);
}

#[test]
fn icons_swap_with_theme() {
    assert_eq!(Theme::Light.icon(), "fas fa-moon");
    assert_eq!(Theme::Dark.icon(), "fas fa-sun");
}
