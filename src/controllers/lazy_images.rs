//! Deferred image loading and critical image preloads.

use std::cell::RefCell;
use std::rc::Rc;

use super::{LogErr, Page, index_of, observe_intersections};
use crate::consts;
use crate::error::FolioError;
use crate::state::observe_once::ObserveOnce;

/// Swap `data-src` into `src` for each lazy image as it enters the viewport.
///
/// # Errors
///
/// Fails if the intersection observer cannot be created.
pub fn install(page: &Page) -> Result<(), FolioError> {
    preload(page);

    let images = Rc::new(page.query_all(consts::LAZY_IMAGE_SELECTOR));
    if images.is_empty() {
        return Ok(());
    }
    let loaded = Rc::new(RefCell::new(ObserveOnce::default()));

    let observed = Rc::clone(&images);
    let observer = observe_intersections(None, move |entries, observer| {
        for entry in entries.iter().filter(|e| e.is_intersecting()) {
            let image = entry.target();
            let Some(index) = index_of(&observed, &image) else {
                continue;
            };
            if !loaded.borrow_mut().claim(index) {
                continue;
            }
            if let Some(source) = image.get_attribute(consts::LAZY_SOURCE_ATTR) {
                image.set_attribute("src", &source).log_err("lazy image src");
            }
            image.class_list().remove_1(consts::LAZY_CLASS).log_err("lazy marker");
            observer.unobserve(&image);
        }
    })?;
    for image in images.iter() {
        observer.observe(image);
    }
    log::debug!("deferring {} images", images.len());
    Ok(())
}

/// Append `<link rel="preload" as="image">` for each configured image.
fn preload(page: &Page) {
    let Some(head) = page.document.head() else {
        return;
    };
    for href in &page.config.preload_images {
        let link = match page.document.create_element("link") {
            Ok(link) => link,
            Err(err) => {
                log::warn!("preload link: {err:?}");
                return;
            }
        };
        link.set_attribute("rel", "preload").log_err("preload rel");
        link.set_attribute("as", "image").log_err("preload as");
        link.set_attribute("href", href).log_err("preload href");
        head.append_child(&link).log_err("preload append");
    }
}
