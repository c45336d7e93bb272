//! Page entry points.
//!
//! SYSTEM CONTEXT
//! ==============
//! The wasm module starts as soon as it is instantiated. It defers the
//! startup hook until the document is parsed and the load-complete hook until
//! every resource has arrived. Each component is installed independently; a
//! failure is logged and the remaining components still come up.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{Document, ErrorEvent};

use crate::config::SiteConfig;
use crate::consts;
use crate::controllers::menu::MobileMenu;
use crate::controllers::notifications::Notifier;
use crate::controllers::typing::TypingEffect;
use crate::controllers::{
    Page, analytics, anchor, contact_form, header, lazy_images, listen, loading, project_filter, reveal,
    service_worker, skill_bars, theme,
};
use crate::error::FolioError;
use crate::state::notification::NotificationKind;

thread_local! {
    /// Notifier shared with page scripts through [`show_notification`].
    static NOTIFIER: RefCell<Option<Rc<Notifier>>> = const { RefCell::new(None) };
    /// Typing effect kept alive for its timers and for [`restart_typing`].
    static TYPING: RefCell<Option<Rc<TypingEffect>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        log::debug!("logger already installed: {err}");
    }

    let page = match web_sys::window().and_then(|w| w.document()) {
        Some(document) => Page::current(load_config(&document)),
        None => Err(FolioError::MissingElement("document")),
    };
    let page = match page {
        Ok(page) => page,
        Err(err) => {
            log::warn!("folio not started: {err}");
            return;
        }
    };

    report(install_error_hook(&page), "error hook");
    report(when_ready(&page), "startup hook");
    report(when_loaded(&page), "load hook");
}

/// Show a toast from page scripts, e.g. `show_notification("Saved", "success")`.
#[wasm_bindgen]
pub fn show_notification(message: &str, kind: &str) {
    NOTIFIER.with(|slot| match slot.borrow().as_ref() {
        Some(notifier) => notifier.show(message, NotificationKind::from_name(kind)),
        None => log::warn!("notification before startup: {message}"),
    });
}

/// Type the hero heading out again, if the typing effect is enabled.
#[wasm_bindgen]
pub fn restart_typing() {
    TYPING.with(|slot| {
        if let Some(typing) = slot.borrow().as_ref() {
            typing.restart();
        }
    });
}

/// Read the inline configuration block, falling back to defaults.
fn load_config(document: &Document) -> SiteConfig {
    let Some(raw) = document.get_element_by_id(consts::CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("{err}; using defaults");
            SiteConfig::default()
        }
    }
}

/// Startup hook: activate the default component set plus any modules the
/// configuration switches on.
fn boot(page: &Page) {
    let notifier = Notifier::new(page.document.clone(), page.config.notifications);
    NOTIFIER.with(|slot| *slot.borrow_mut() = Some(Rc::clone(&notifier)));

    report(header::install(page), "scroll header");
    report(reveal::install(page), "reveal on scroll");
    let menu = match MobileMenu::install(page) {
        Ok(menu) => menu,
        Err(err) => {
            log::warn!("mobile menu: {err}");
            None
        }
    };
    report(anchor::install(page, menu), "smooth anchors");
    report(analytics::install(page), "analytics");

    let features = page.config.features;
    if features.lazy_images {
        report(lazy_images::install(page), "lazy images");
    }
    if features.typing_effect {
        if let Some(typing) = TypingEffect::install(page) {
            typing.restart();
            TYPING.with(|slot| *slot.borrow_mut() = Some(typing));
        }
    }
    if features.skill_bars {
        report(skill_bars::install(page), "skill bars");
    }
    if features.contact_form {
        report(contact_form::install(page, notifier), "contact form");
    }
    if features.project_filter {
        report(project_filter::install(page), "project filter");
    }
    if features.theme_toggle {
        report(theme::install(page), "theme toggle");
    }
    log::info!("folio ready");
}

/// Load-complete hook.
fn on_load(page: &Page) {
    loading::finish(page);
    service_worker::register(page);
}

fn when_ready(page: &Page) -> Result<(), FolioError> {
    if page.document.ready_state() != "loading" {
        boot(page);
        return Ok(());
    }
    let ready = page.clone();
    let mut pending = Some(());
    listen(&page.document, "DOMContentLoaded", move |_| {
        if pending.take().is_some() {
            boot(&ready);
        }
    })
}

fn when_loaded(page: &Page) -> Result<(), FolioError> {
    if page.document.ready_state() == "complete" {
        on_load(page);
        return Ok(());
    }
    let loaded = page.clone();
    let mut pending = Some(());
    listen(&page.window, "load", move |_| {
        if pending.take().is_some() {
            on_load(&loaded);
        }
    })
}

/// Uncaught script errors are logged and otherwise ignored.
fn install_error_hook(page: &Page) -> Result<(), FolioError> {
    listen(&page.window, "error", |event| {
        let message = event.dyn_ref::<ErrorEvent>().map(ErrorEvent::message).unwrap_or_default();
        log::warn!("Non-critical error handled: {message}");
    })
}

fn report(result: Result<(), FolioError>, component: &str) {
    if let Err(err) = result {
        log::warn!("{component}: {err}");
    }
}
