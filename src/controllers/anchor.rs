//! Smooth scrolling for same-page anchors.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use super::menu::MobileMenu;
use super::{Page, listen};
use crate::consts;
use crate::error::FolioError;
use crate::util::anchor::{fragment_target, scroll_target};

/// Intercept every `href="#…"` link. Links to missing targets are swallowed
/// without scrolling.
///
/// # Errors
///
/// Fails if a click listener cannot be attached.
pub fn install(page: &Page, menu: Option<Rc<MobileMenu>>) -> Result<(), FolioError> {
    let header_offset = page.config.navigation.header_offset_px;
    for anchor in page.query_all(consts::FRAGMENT_ANCHOR_SELECTOR) {
        let page = page.clone();
        let menu = menu.clone();
        let href = anchor.get_attribute("href").unwrap_or_default();
        listen(&anchor, "click", move |event| {
            event.prevent_default();
            let Some(target) = fragment_target(&href).and_then(|id| page.document.get_element_by_id(id)) else {
                return;
            };
            let Some(target) = target.dyn_ref::<HtmlElement>() else {
                return;
            };
            let options = ScrollToOptions::new();
            options.set_top(scroll_target(f64::from(target.offset_top()), header_offset));
            options.set_behavior(ScrollBehavior::Smooth);
            page.window.scroll_to_with_scroll_to_options(&options);

            if let Some(menu) = &menu {
                menu.close();
            }
        })?;
    }
    Ok(())
}
