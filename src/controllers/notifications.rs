//! Toast notification controller.
//!
//! Owns the DOM node and the timers of every attached toast. Dropping a
//! [`ToastNode`] cancels its timers and releases its close-button listener,
//! which is how [`NotificationCommand::Remove`] and
//! [`NotificationCommand::CancelPending`] are carried out.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event};

use super::LogErr;
use crate::config::NotificationConfig;
use crate::consts;
use crate::error::FolioError;
use crate::state::notification::{
    Notification, NotificationCenter, NotificationCommand, NotificationId, NotificationKind,
};

struct ToastNode {
    root: Element,
    reveal: Option<Timeout>,
    auto_dismiss: Option<Timeout>,
    _removal: Option<Timeout>,
    _on_close: Closure<dyn FnMut(Event)>,
}

pub struct Notifier {
    center: RefCell<NotificationCenter>,
    nodes: RefCell<HashMap<NotificationId, ToastNode>>,
    document: Document,
}

impl Notifier {
    #[must_use]
    pub fn new(document: Document, timings: NotificationConfig) -> Rc<Self> {
        Rc::new(Self {
            center: RefCell::new(NotificationCenter::new(timings)),
            nodes: RefCell::new(HashMap::new()),
            document,
        })
    }

    /// Show `message`, replacing any toast already on screen.
    pub fn show(self: &Rc<Self>, message: &str, kind: NotificationKind) {
        let commands = self.center.borrow_mut().show(message, kind);
        self.apply(commands);
    }

    fn apply(self: &Rc<Self>, commands: Vec<NotificationCommand>) {
        for command in commands {
            match command {
                NotificationCommand::Remove(id) => {
                    let node = self.nodes.borrow_mut().remove(&id);
                    if let Some(node) = node {
                        node.root.remove();
                    }
                }
                NotificationCommand::Insert(notification) => {
                    if let Err(err) = self.insert(notification) {
                        log::warn!("could not show notification: {err}");
                    }
                }
                NotificationCommand::ScheduleReveal { id, delay_ms } => {
                    let timer = self.timer(delay_ms, id, NotificationCenter::reveal_elapsed);
                    self.with_node(id, |node| node.reveal = Some(timer));
                }
                NotificationCommand::ScheduleDismiss { id, delay_ms } => {
                    let timer = self.timer(delay_ms, id, NotificationCenter::dismiss);
                    self.with_node(id, |node| node.auto_dismiss = Some(timer));
                }
                NotificationCommand::ScheduleRemoval { id, delay_ms } => {
                    let timer = self.timer(delay_ms, id, NotificationCenter::removal_elapsed);
                    self.with_node(id, |node| node._removal = Some(timer));
                }
                NotificationCommand::CancelPending(id) => {
                    self.with_node(id, |node| {
                        node.reveal.take();
                        node.auto_dismiss.take();
                    });
                }
                NotificationCommand::AddShowClass(id) => {
                    self.with_node(id, |node| {
                        node.root.class_list().add_1(consts::SHOW_CLASS).log_err("notification show");
                    });
                }
                NotificationCommand::RemoveShowClass(id) => {
                    self.with_node(id, |node| {
                        node.root.class_list().remove_1(consts::SHOW_CLASS).log_err("notification hide");
                    });
                }
            }
        }
    }

    fn with_node(&self, id: NotificationId, f: impl FnOnce(&mut ToastNode)) {
        if let Some(node) = self.nodes.borrow_mut().get_mut(&id) {
            f(node);
        }
    }

    /// Timer that feeds `transition(id)` back into the centre when it fires.
    fn timer(
        self: &Rc<Self>,
        delay_ms: u32,
        id: NotificationId,
        transition: fn(&mut NotificationCenter, NotificationId) -> Vec<NotificationCommand>,
    ) -> Timeout {
        let weak = Rc::downgrade(self);
        Timeout::new(delay_ms, move || {
            let Some(notifier) = weak.upgrade() else {
                return;
            };
            let commands = transition(&mut notifier.center.borrow_mut(), id);
            notifier.apply(commands);
        })
    }

    fn insert(self: &Rc<Self>, notification: Notification) -> Result<(), FolioError> {
        let body = self.document.body().ok_or(FolioError::MissingElement("body"))?;

        let root = self.document.create_element("div")?;
        root.set_class_name(&notification.kind.root_class());

        let content = self.document.create_element("div")?;
        content.set_class_name(consts::NOTIFICATION_CONTENT_CLASS);

        let icon = self.document.create_element("i")?;
        icon.set_class_name(&format!("fas {}", notification.kind.icon()));

        let text = self.document.create_element("span")?;
        text.set_text_content(Some(notification.message.as_str()));

        let close = self.document.create_element("button")?;
        close.set_class_name(consts::NOTIFICATION_CLOSE_CLASS);
        let close_icon = self.document.create_element("i")?;
        close_icon.set_class_name(consts::NOTIFICATION_CLOSE_ICON);
        close.append_child(&close_icon)?;

        content.append_child(&icon)?;
        content.append_child(&text)?;
        content.append_child(&close)?;
        root.append_child(&content)?;

        let weak: Weak<Self> = Rc::downgrade(self);
        let id = notification.id;
        let on_close = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            let Some(notifier) = weak.upgrade() else {
                return;
            };
            let commands = notifier.center.borrow_mut().dismiss(id);
            notifier.apply(commands);
        });
        close.add_event_listener_with_callback("click", on_close.as_ref().unchecked_ref())?;

        body.append_child(&root)?;
        self.nodes.borrow_mut().insert(
            id,
            ToastNode { root, reveal: None, auto_dismiss: None, _removal: None, _on_close: on_close },
        );
        Ok(())
    }
}
