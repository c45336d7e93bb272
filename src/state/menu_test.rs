use super::*;
use proptest::prelude::*;

// =============================================================
// Basic transitions
// =============================================================

#[test]
fn starts_closed_with_bars_icon() {
    let menu = MenuState::default();
    assert!(!menu.is_open());
    assert_eq!(menu.visual(), MenuVisual { panel_shown: false, icon: MenuIcon::Bars });
}

#[test]
fn toggle_flips_open_and_icon() {
    let mut menu = MenuState::default();
    let open = menu.toggle();
    assert!(menu.is_open());
    assert_eq!(open, MenuVisual { panel_shown: true, icon: MenuIcon::Times });
    let closed = menu.toggle();
    assert!(!menu.is_open());
    assert_eq!(closed, MenuVisual { panel_shown: false, icon: MenuIcon::Bars });
}

#[test]
fn repeated_close_is_visually_stable() {
    let mut menu = MenuState::default();
    menu.toggle();
    let first = menu.close();
    let second = menu.close();
    assert_eq!(first, second);
    assert!(!menu.is_open());
}

#[test]
fn icon_class_names_match_glyphs() {
    assert_eq!(MenuIcon::Bars.class_name(), "fas fa-bars");
    assert_eq!(MenuIcon::Times.class_name(), "fas fa-times");
}

// =============================================================
// Triggers
// =============================================================

#[test]
fn link_click_closes_only_in_mobile_layout() {
    let mut menu = MenuState::default();
    menu.toggle();
    assert_eq!(menu.on_link_click(1024.0), None);
    assert!(menu.is_open());
    assert_eq!(menu.on_link_click(768.0), Some(MenuVisual::for_open(false)));
    assert!(!menu.is_open());
}

#[test]
fn outside_click_closes_open_menu() {
    let mut menu = MenuState::default();
    menu.toggle();
    assert_eq!(menu.on_document_click(false, false), Some(MenuVisual::for_open(false)));
    assert!(!menu.is_open());
}

#[test]
fn outside_click_while_closed_writes_nothing() {
    let mut menu = MenuState::default();
    assert_eq!(menu.on_document_click(false, false), None);
}

#[test]
fn clicks_inside_button_or_panel_are_ignored() {
    let mut menu = MenuState::default();
    menu.toggle();
    assert_eq!(menu.on_document_click(true, false), None);
    assert_eq!(menu.on_document_click(false, true), None);
    assert!(menu.is_open());
}

#[test]
fn resize_past_breakpoint_closes_even_when_closed() {
    let mut menu = MenuState::default();
    assert_eq!(menu.on_resize(1200.0), Some(MenuVisual::for_open(false)));
    menu.toggle();
    assert_eq!(menu.on_resize(1200.0), Some(MenuVisual::for_open(false)));
    assert!(!menu.is_open());
    assert_eq!(menu.on_resize(1200.0), Some(MenuVisual::for_open(false)));
}

#[test]
fn resize_within_mobile_layout_keeps_state() {
    let mut menu = MenuState::default();
    menu.toggle();
    assert_eq!(menu.on_resize(768.0), None);
    assert!(menu.is_open());
}

#[test]
fn custom_breakpoint_is_respected() {
    let mut menu = MenuState::new(1000.0);
    menu.toggle();
    assert_eq!(menu.on_resize(900.0), None);
    assert!(menu.on_link_click(950.0).is_some());
}

// =============================================================
// Invariant: visual is a pure function of the final flag
// =============================================================

#[derive(Clone, Debug)]
enum Op {
    Toggle,
    Close,
    Link(f64),
    Outside(bool, bool),
    Resize(f64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Toggle),
        Just(Op::Close),
        (0.0f64..2000.0).prop_map(Op::Link),
        (any::<bool>(), any::<bool>()).prop_map(|(b, p)| Op::Outside(b, p)),
        (0.0f64..2000.0).prop_map(Op::Resize),
    ]
}

proptest! {
    #[test]
    fn last_emitted_visual_matches_final_state(ops in proptest::collection::vec(op_strategy(), 0..40)) {
        let mut menu = MenuState::default();
        let mut rendered = menu.visual();
        for op in ops {
            let emitted = match op {
                Op::Toggle => Some(menu.toggle()),
                Op::Close => Some(menu.close()),
                Op::Link(w) => menu.on_link_click(w),
                Op::Outside(b, p) => menu.on_document_click(b, p),
                Op::Resize(w) => menu.on_resize(w),
            };
            if let Some(visual) = emitted {
                rendered = visual;
            }
            prop_assert_eq!(rendered, MenuVisual::for_open(menu.is_open()));
        }
    }

    #[test]
    fn wide_resize_always_ends_closed(ops in proptest::collection::vec(op_strategy(), 0..20), width in 769.0f64..4000.0) {
        let mut menu = MenuState::default();
        for op in ops {
            match op {
                Op::Toggle => { menu.toggle(); }
                Op::Close => { menu.close(); }
                Op::Link(w) => { menu.on_link_click(w); }
                Op::Outside(b, p) => { menu.on_document_click(b, p); }
                Op::Resize(w) => { menu.on_resize(w); }
            }
        }
        prop_assert_eq!(menu.on_resize(width), Some(MenuVisual::for_open(false)));
        prop_assert_eq!(menu.on_resize(width), Some(MenuVisual::for_open(false)));
        prop_assert!(!menu.is_open());
    }
}
