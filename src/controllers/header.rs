//! Scroll-aware header controller.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlElement, Window};

use super::{LogErr, Page, listen, scroll_top};
use crate::consts;
use crate::error::FolioError;
use crate::state::scroll_header::{HeaderStyle, ScrollHeader};

/// Restyle the header at most once per animation frame while scrolling.
///
/// # Errors
///
/// Fails if the scroll listener cannot be attached.
pub fn install(page: &Page) -> Result<(), FolioError> {
    let Some(header) = page.query(consts::HEADER_SELECTOR) else {
        log::debug!("no header element");
        return Ok(());
    };
    let Some(header) = header.dyn_ref::<HtmlElement>().cloned() else {
        return Ok(());
    };
    let state = Rc::new(RefCell::new(ScrollHeader::new(page.config.header)));
    let window = page.window.clone();
    listen(&page.window, "scroll", move |_| {
        if state.borrow_mut().on_scroll() {
            request_update(&window, &state, &header);
        }
    })
}

fn request_update(window: &Window, state: &Rc<RefCell<ScrollHeader>>, header: &HtmlElement) {
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let window_for_cb = window.clone();
    let state_for_cb = Rc::clone(state);
    let header_for_cb = header.clone();
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        let style = state_for_cb.borrow_mut().on_frame(scroll_top(&window_for_cb));
        apply(&header_for_cb, style);
        holder_for_cb.borrow_mut().take();
    }) as Box<dyn FnMut(f64)>);

    if window.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok() {
        *holder.borrow_mut() = Some(cb);
    } else {
        state.borrow_mut().frame_unavailable();
        let style = state.borrow_mut().on_frame(scroll_top(window));
        apply(header, style);
    }
}

fn apply(header: &HtmlElement, style: HeaderStyle) {
    let css = header.style();
    css.set_property("background", style.appearance.background()).log_err("header background");
    css.set_property("box-shadow", style.appearance.box_shadow()).log_err("header shadow");
    css.set_property("transform", style.visibility.transform()).log_err("header transform");
}
