//! Typewriter effect for the hero heading.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use web_sys::Element;

use super::Page;
use crate::consts;
use crate::state::typing::{TypingSchedule, Typewriter};

/// Attribute holding the full heading text so a restart types it again from
/// scratch rather than from whatever is currently visible.
const FULL_TEXT_ATTR: &str = "data-typing-text";

pub struct TypingEffect {
    heading: Element,
    start: RefCell<Option<Timeout>>,
    ticker: Rc<RefCell<Option<Interval>>>,
}

impl TypingEffect {
    #[must_use]
    pub fn install(page: &Page) -> Option<Rc<Self>> {
        let Some(heading) = page.query(consts::HERO_TITLE_SELECTOR) else {
            log::debug!("no hero heading to type");
            return None;
        };
        Some(Rc::new(Self { heading, start: RefCell::new(None), ticker: Rc::new(RefCell::new(None)) }))
    }

    /// Clear the heading and type it out again. Any run in progress is
    /// cancelled first.
    pub fn restart(&self) {
        self.start.borrow_mut().take();
        self.ticker.borrow_mut().take();

        let text = match self.heading.get_attribute(FULL_TEXT_ATTR) {
            Some(text) => text,
            None => {
                let text = self.heading.text_content().unwrap_or_default();
                if let Err(err) = self.heading.set_attribute(FULL_TEXT_ATTR, &text) {
                    log::warn!("typing text cache: {err:?}");
                }
                text
            }
        };
        self.heading.set_text_content(Some(""));

        let schedule = TypingSchedule::default();
        let heading = self.heading.clone();
        let ticker = Rc::clone(&self.ticker);
        let start = Timeout::new(schedule.start_delay_ms, move || {
            let mut typewriter = Typewriter::new(&text);
            let Some(first) = typewriter.next_frame() else {
                return;
            };
            heading.set_text_content(Some(first.as_str()));
            let ticker_for_cb = Rc::clone(&ticker);
            let interval = Interval::new(schedule.step_ms, move || match typewriter.next_frame() {
                Some(shown) => heading.set_text_content(Some(shown.as_str())),
                None => {
                    ticker_for_cb.borrow_mut().take();
                }
            });
            *ticker.borrow_mut() = Some(interval);
        });
        *self.start.borrow_mut() = Some(start);
    }
}
