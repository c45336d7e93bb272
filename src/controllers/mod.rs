//! Browser glue for each page component.
//!
//! ARCHITECTURE
//! ============
//! Controllers own a state machine from [`crate::state`] and translate its
//! output into DOM writes, timers and observers. Each `install` looks up the
//! markup it needs and quietly does nothing when that markup is absent, so one
//! missing section never blocks the rest of the page.
//!
//! Listeners registered here live for the whole page and are leaked with
//! `Closure::forget`. Per-toast and per-card handles (timers, the close
//! button listener) are owned and dropped with their element instead.

pub mod analytics;
pub mod anchor;
pub mod contact_form;
pub mod header;
pub mod lazy_images;
pub mod loading;
pub mod menu;
pub mod notifications;
pub mod project_filter;
pub mod reveal;
pub mod service_worker;
pub mod skill_bars;
pub mod theme;
pub mod typing;

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    Window,
};

use crate::config::SiteConfig;
use crate::error::FolioError;

/// Log a failed browser call instead of dropping it.
pub(crate) trait LogErr {
    fn log_err(self, context: &str);
}

impl<T> LogErr for Result<T, JsValue> {
    fn log_err(self, context: &str) {
        if let Err(err) = self {
            log::warn!("{context}: {err:?}");
        }
    }
}

/// Handles shared by every controller.
#[derive(Clone)]
pub struct Page {
    pub window: Window,
    pub document: Document,
    pub config: Rc<SiteConfig>,
}

impl Page {
    /// Bind to the current browser window.
    ///
    /// # Errors
    ///
    /// [`FolioError::MissingElement`] outside a window context (e.g. a worker).
    pub fn current(config: SiteConfig) -> Result<Self, FolioError> {
        let window = web_sys::window().ok_or(FolioError::MissingElement("window"))?;
        let document = window.document().ok_or(FolioError::MissingElement("document"))?;
        Ok(Self { window, document, config: Rc::new(config) })
    }

    /// First element matching `selector`, or `None`.
    #[must_use]
    pub fn query(&self, selector: &str) -> Option<Element> {
        match self.document.query_selector(selector) {
            Ok(found) => found,
            Err(err) => {
                log::warn!("bad selector {selector}: {err:?}");
                None
            }
        }
    }

    /// Every element matching `selector`, in document order.
    #[must_use]
    pub fn query_all(&self, selector: &str) -> Vec<Element> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(err) => {
                log::warn!("bad selector {selector}: {err:?}");
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_ref::<Element>().cloned())
            .collect()
    }
}

pub(crate) fn viewport_width(window: &Window) -> f64 {
    match window.inner_width() {
        Ok(width) => width.as_f64().unwrap_or(0.0),
        Err(err) => {
            log::warn!("innerWidth unavailable: {err:?}");
            0.0
        }
    }
}

/// Current vertical scroll offset of the page.
pub(crate) fn scroll_top(window: &Window) -> f64 {
    match window.scroll_y() {
        Ok(offset) => offset,
        Err(_) => window
            .document()
            .and_then(|doc| doc.document_element())
            .map_or(0.0, |root| f64::from(root.scroll_top())),
    }
}

/// Attach a page-lifetime listener.
pub(crate) fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), FolioError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Create an intersection observer whose callback receives each batch of
/// entries in delivery order.
pub(crate) fn observe_intersections(
    options: Option<&IntersectionObserverInit>,
    mut on_batch: impl FnMut(&[IntersectionObserverEntry], &IntersectionObserver) + 'static,
) -> Result<IntersectionObserver, FolioError> {
    let closure = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let entries: Vec<IntersectionObserverEntry> =
                entries.iter().map(|entry| entry.unchecked_into::<IntersectionObserverEntry>()).collect();
            on_batch(&entries, &observer);
        },
    );
    let callback = closure.as_ref().unchecked_ref();
    let observer = match options {
        Some(init) => IntersectionObserver::new_with_options(callback, init)?,
        None => IntersectionObserver::new(callback)?,
    };
    closure.forget();
    Ok(observer)
}

/// Position of `target` within `elements`, compared by identity.
pub(crate) fn index_of(elements: &[Element], target: &Element) -> Option<usize> {
    elements.iter().position(|el| el == target)
}
