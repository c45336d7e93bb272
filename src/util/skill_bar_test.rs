use super::*;

#[test]
fn integer_percentages() {
    assert_eq!(fill_width("85").as_deref(), Some("85%"));
    assert_eq!(fill_width(" 40 ").as_deref(), Some("40%"));
}

#[test]
fn fractional_and_suffixed_values() {
    assert_eq!(fill_width("72.5").as_deref(), Some("72.5%"));
    assert_eq!(fill_width("90%").as_deref(), Some("90%"));
}

#[test]
fn out_of_range_is_clamped() {
    assert_eq!(fill_width("140").as_deref(), Some("100%"));
    assert_eq!(fill_width("-5").as_deref(), Some("0%"));
}

#[test]
fn garbage_is_rejected() {
    assert_eq!(fill_width(""), None);
    assert_eq!(fill_width("lots"), None);
    assert_eq!(fill_width("NaN"), None);
    assert_eq!(fill_width("inf"), None);
}
