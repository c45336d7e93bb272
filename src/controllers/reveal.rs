//! Reveal-on-scroll controller.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::IntersectionObserverInit;

use super::{LogErr, Page, index_of, observe_intersections};
use crate::consts;
use crate::error::FolioError;
use crate::state::reveal::RevealRegistry;

/// Observe every revealable card and cascade the visible class onto each
/// batch that scrolls into view.
///
/// # Errors
///
/// Fails if the intersection observer cannot be created.
pub fn install(page: &Page) -> Result<(), FolioError> {
    let elements = page.query_all(&consts::REVEAL_SELECTORS.join(", "));
    if elements.is_empty() {
        log::debug!("nothing to reveal");
        return Ok(());
    }

    let reveal = &page.config.reveal;
    let registry = Rc::new(RefCell::new(RevealRegistry::new(reveal.stagger_ms)));
    for (index, element) in elements.iter().enumerate() {
        element.class_list().add_1(consts::ANIMATE_ON_SCROLL_CLASS).log_err("reveal marker");
        registry.borrow_mut().track(index);
    }
    let elements = Rc::new(elements);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(reveal.threshold));
    init.set_root_margin(&reveal.root_margin);

    let observed = Rc::clone(&elements);
    let observer = observe_intersections(Some(&init), move |entries, observer| {
        let batch: Vec<(usize, bool)> = entries
            .iter()
            .filter_map(|entry| index_of(&observed, &entry.target()).map(|i| (i, entry.is_intersecting())))
            .collect();
        let schedules = registry.borrow_mut().on_batch(&batch);
        for schedule in schedules {
            let registry = Rc::clone(&registry);
            let elements = Rc::clone(&observed);
            let observer = observer.clone();
            Timeout::new(schedule.delay_ms, move || {
                if !registry.borrow_mut().mark_revealed(&schedule.key) {
                    return;
                }
                if let Some(element) = elements.get(schedule.key) {
                    element.class_list().add_1(consts::VISIBLE_CLASS).log_err("reveal class");
                    observer.unobserve(element);
                }
            })
            .forget();
        }
    })?;

    for element in elements.iter() {
        observer.observe(element);
    }
    log::debug!("observing {} revealable elements", elements.len());
    Ok(())
}
