//! Background service worker registration.

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{JsFuture, spawn_local};

use super::Page;

/// Register the configured worker script. Unsupported browsers and failed
/// registrations are logged and otherwise ignored.
pub fn register(page: &Page) {
    let navigator = page.window.navigator();
    match js_sys::Reflect::has(&navigator, &JsValue::from_str("serviceWorker")) {
        Ok(true) => {}
        Ok(false) => {
            log::debug!("service workers unsupported");
            return;
        }
        Err(err) => {
            log::warn!("service worker probe: {err:?}");
            return;
        }
    }
    let promise = navigator.service_worker().register(&page.config.service_worker_url);
    spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(registration) => log::info!("SW registered: {registration:?}"),
            Err(err) => log::warn!("SW registration failed: {err:?}"),
        }
    });
}
