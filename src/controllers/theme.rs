//! Light/dark theme toggle with persisted preference.

use std::cell::Cell;
use std::rc::Rc;

use web_sys::{Element, Storage};

use super::{LogErr, Page, listen};
use crate::consts;
use crate::error::FolioError;
use crate::state::theme::Theme;

/// Apply the stored theme and, when the page has a toggle, flip it on click.
///
/// # Errors
///
/// Fails if the click listener cannot be attached.
pub fn install(page: &Page) -> Result<(), FolioError> {
    let storage = local_storage(page);
    let stored = storage.as_ref().and_then(|s| match s.get_item(consts::THEME_STORAGE_KEY) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("theme read: {err:?}");
            None
        }
    });
    let current = Rc::new(Cell::new(Theme::from_stored(stored.as_deref())));
    let root = page.document.document_element().ok_or(FolioError::MissingElement("html"))?;
    apply(&root, current.get());

    let Some(toggle) = page.query(consts::THEME_TOGGLE_SELECTOR) else {
        return Ok(());
    };
    set_icon(&toggle, current.get());
    let target = toggle.clone();
    listen(&target, "click", move |_| {
        let next = current.get().flipped();
        current.set(next);
        apply(&root, next);
        if let Some(storage) = &storage {
            storage.set_item(consts::THEME_STORAGE_KEY, next.as_str()).log_err("theme write");
        }
        set_icon(&toggle, next);
    })
}

fn local_storage(page: &Page) -> Option<Storage> {
    match page.window.local_storage() {
        Ok(storage) => storage,
        Err(err) => {
            log::warn!("localStorage unavailable: {err:?}");
            None
        }
    }
}

fn apply(root: &Element, theme: Theme) {
    root.set_attribute(consts::THEME_ATTR, theme.as_str()).log_err("theme attribute");
}

fn set_icon(toggle: &Element, theme: Theme) {
    if let Ok(Some(icon)) = toggle.query_selector("i") {
        icon.set_class_name(theme.icon());
    }
}
