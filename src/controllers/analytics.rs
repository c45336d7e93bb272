//! Best-effort click tracking through the page's `gtag` function.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlAnchorElement};

use super::{Page, listen};
use crate::consts;
use crate::error::FolioError;
use crate::util::analytics::{AnalyticsEvent, TrackedClick};

/// Report clicks on project links, contact links and primary buttons.
///
/// # Errors
///
/// Fails if the document listener cannot be attached.
pub fn install(page: &Page) -> Result<(), FolioError> {
    listen(&page.document, "click", move |event| {
        let target = event.target();
        let Some(element) = target.as_ref().and_then(|t| t.dyn_ref::<Element>()) else {
            return;
        };
        let Some(click) = classify(element) else {
            return;
        };
        if let Err(err) = track(&AnalyticsEvent::from(click)) {
            log::debug!("analytics skipped: {err}");
        }
    })
}

fn classify(element: &Element) -> Option<TrackedClick> {
    let matches = |selector: &str| element.matches(selector).unwrap_or(false);
    if matches(consts::PROJECT_LINK_SELECTOR) {
        Some(TrackedClick::ProjectLink(resolved_href(element)))
    } else if matches(consts::CONTACT_LINK_SELECTOR) {
        Some(TrackedClick::ContactLink(resolved_href(element)))
    } else if matches(consts::PRIMARY_BUTTON_SELECTOR) {
        Some(TrackedClick::PrimaryButton(element.text_content().unwrap_or_default()))
    } else {
        None
    }
}

/// Absolute URL of a link, as the browser resolves it against the page.
fn resolved_href(element: &Element) -> Option<String> {
    element.dyn_ref::<HtmlAnchorElement>().map(HtmlAnchorElement::href)
}

/// Call `gtag('event', action, params)` if the page defines `gtag`.
fn track(event: &AnalyticsEvent) -> Result<(), FolioError> {
    let gtag = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("gtag"))?;
    let Some(gtag) = gtag.dyn_ref::<js_sys::Function>() else {
        return Ok(());
    };
    let json = event.params_json().map_err(|err| FolioError::Browser(err.to_string()))?;
    let params = js_sys::JSON::parse(&json)?;
    gtag.call3(&JsValue::NULL, &JsValue::from_str("event"), &JsValue::from_str(event.action), &params)?;
    Ok(())
}
