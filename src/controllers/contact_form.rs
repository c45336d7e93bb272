//! Contact form validation with a simulated submission.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{FormData, HtmlFormElement};

use super::notifications::Notifier;
use super::{Page, listen};
use crate::consts;
use crate::error::FolioError;
use crate::state::notification::NotificationKind;
use crate::util::contact_form::{ContactSubmission, SUCCESS_MESSAGE};

/// Validate on submit and report through the notifier. Nothing is sent.
///
/// # Errors
///
/// Fails if the submit listener cannot be attached.
pub fn install(page: &Page, notifier: Rc<Notifier>) -> Result<(), FolioError> {
    let Some(form) = page.query(consts::CONTACT_FORM_SELECTOR) else {
        log::debug!("no contact form");
        return Ok(());
    };
    let Some(form) = form.dyn_ref::<HtmlFormElement>().cloned() else {
        return Ok(());
    };
    let target = form.clone();
    listen(&target, "submit", move |event| {
        event.prevent_default();
        let submission = match read(&form) {
            Ok(submission) => submission,
            Err(err) => {
                log::warn!("contact form unreadable: {err}");
                return;
            }
        };
        match submission.validate() {
            Ok(()) => {
                notifier.show(SUCCESS_MESSAGE, NotificationKind::Success);
                form.reset();
            }
            Err(err) => notifier.show(&err.to_string(), NotificationKind::Error),
        }
    })
}

fn read(form: &HtmlFormElement) -> Result<ContactSubmission, FolioError> {
    let data = FormData::new_with_form(form)?;
    let field = |name: &str| data.get(name).as_string().unwrap_or_default();
    Ok(ContactSubmission { name: field("name"), email: field("email"), message: field("message") })
}
