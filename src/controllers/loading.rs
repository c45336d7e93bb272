//! Loading bar shown until every page resource has arrived.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::{LogErr, Page};
use crate::consts;

/// Play the loading bar's completion transition, then take it out of layout.
pub fn finish(page: &Page) {
    let Some(bar) = page.document.get_element_by_id(consts::LOADING_BAR_ID) else {
        return;
    };
    bar.class_list().add_1(consts::LOADING_COMPLETE_CLASS).log_err("loading bar");
    let Some(bar) = bar.dyn_ref::<HtmlElement>().cloned() else {
        return;
    };
    Timeout::new(consts::LOADING_BAR_HIDE_DELAY_MS, move || {
        bar.style().set_property("display", "none").log_err("loading bar display");
    })
    .forget();
}
