//! Skill bar fill animation.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::{LogErr, Page, index_of, observe_intersections};
use crate::consts;
use crate::error::FolioError;
use crate::state::observe_once::ObserveOnce;
use crate::util::skill_bar::fill_width;

/// Fill each skill bar to its `data-percentage` the first time it is seen.
///
/// # Errors
///
/// Fails if the intersection observer cannot be created.
pub fn install(page: &Page) -> Result<(), FolioError> {
    let bars = Rc::new(page.query_all(consts::SKILL_BAR_SELECTOR));
    if bars.is_empty() {
        return Ok(());
    }
    let fired = Rc::new(RefCell::new(ObserveOnce::default()));

    let observed = Rc::clone(&bars);
    let observer = observe_intersections(None, move |entries, observer| {
        for entry in entries.iter().filter(|e| e.is_intersecting()) {
            let target = entry.target();
            let Some(index) = index_of(&observed, &target) else {
                continue;
            };
            if !fired.borrow_mut().claim(index) {
                continue;
            }
            observer.unobserve(&target);
            fill(&target);
        }
    })?;
    for bar in bars.iter() {
        observer.observe(bar);
    }
    Ok(())
}

fn fill(bar: &web_sys::Element) {
    let fill = match bar.query_selector(consts::SKILL_FILL_SELECTOR) {
        Ok(Some(fill)) => fill,
        Ok(None) => return,
        Err(err) => {
            log::warn!("skill fill lookup: {err:?}");
            return;
        }
    };
    let Some(width) = fill.get_attribute(consts::SKILL_PERCENTAGE_ATTR).as_deref().and_then(fill_width) else {
        return;
    };
    let Some(fill) = fill.dyn_ref::<HtmlElement>().cloned() else {
        return;
    };
    Timeout::new(consts::SKILL_FILL_DELAY_MS, move || {
        fill.style().set_property("width", &width).log_err("skill fill width");
    })
    .forget();
}
