//! Project card filter buttons.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use super::{LogErr, Page, listen};
use crate::consts;
use crate::error::FolioError;
use crate::state::project_filter::{CardVisibility, FilterGroup};

struct FilterView {
    group: RefCell<FilterGroup>,
    buttons: Vec<Element>,
    cards: Vec<HtmlElement>,
    /// Latest fade timer per card; replacing it cancels a superseded fade.
    fades: RefCell<Vec<Option<Timeout>>>,
}

/// Wire the filter buttons. The button carrying the active class in the
/// markup (or the first one) starts active.
///
/// # Errors
///
/// Fails if a click listener cannot be attached.
pub fn install(page: &Page) -> Result<(), FolioError> {
    let buttons = page.query_all(consts::FILTER_BUTTON_SELECTOR);
    if buttons.is_empty() {
        log::debug!("no project filter buttons");
        return Ok(());
    }
    let cards: Vec<HtmlElement> = page
        .query_all(consts::PROJECT_CARD_SELECTOR)
        .iter()
        .filter_map(|card| card.dyn_ref::<HtmlElement>().cloned())
        .collect();

    let filters = buttons.iter().map(|b| b.get_attribute(consts::FILTER_ATTR).unwrap_or_default()).collect();
    let categories = cards.iter().map(|c| c.get_attribute(consts::CATEGORIES_ATTR)).collect();
    let initial = buttons.iter().position(|b| b.class_list().contains(consts::ACTIVE_CLASS)).unwrap_or(0);

    let view = Rc::new(FilterView {
        group: RefCell::new(FilterGroup::new(filters, categories).with_active(initial)),
        fades: RefCell::new(cards.iter().map(|_| None).collect()),
        buttons,
        cards,
    });
    view.mark_active(initial);

    for (index, button) in view.buttons.iter().enumerate() {
        let view = Rc::clone(&view);
        listen(button, "click", move |_| view.select(index))?;
    }
    Ok(())
}

impl FilterView {
    fn select(&self, index: usize) {
        let outcome = self.group.borrow_mut().select(index);
        let Some(outcome) = outcome else {
            return;
        };
        self.mark_active(outcome.active);

        let mut fades = self.fades.borrow_mut();
        for ((card, visibility), fade) in self.cards.iter().zip(outcome.cards).zip(fades.iter_mut()) {
            let card_for_fade = card.clone();
            *fade = Some(match visibility {
                CardVisibility::Show => {
                    card.style().set_property("display", "block").log_err("card display");
                    Timeout::new(consts::FILTER_FADE_IN_MS, move || {
                        card_for_fade.class_list().add_1(consts::VISIBLE_CLASS).log_err("card fade in");
                    })
                }
                CardVisibility::Hide => {
                    card.class_list().remove_1(consts::VISIBLE_CLASS).log_err("card fade out");
                    Timeout::new(consts::FILTER_FADE_OUT_MS, move || {
                        card_for_fade.style().set_property("display", "none").log_err("card display");
                    })
                }
            });
        }
    }

    fn mark_active(&self, active: usize) {
        for (index, button) in self.buttons.iter().enumerate() {
            button
                .class_list()
                .toggle_with_force(consts::ACTIVE_CLASS, index == active)
                .log_err("filter button class");
        }
    }
}
