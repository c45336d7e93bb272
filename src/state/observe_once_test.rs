use super::*;

#[test]
fn first_claim_wins() {
    let mut once = ObserveOnce::default();
    assert!(once.claim(7));
    assert!(!once.claim(7));
    assert!(once.has_fired(&7));
}

#[test]
fn keys_are_independent() {
    let mut once = ObserveOnce::default();
    assert!(once.claim("hero.jpg"));
    assert!(once.claim("team.jpg"));
    assert!(!once.has_fired(&"other.jpg"));
    assert_eq!(once.fired_count(), 2);
}
