//! Mobile menu controller.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, Node};

use super::{LogErr, Page, listen, viewport_width};
use crate::consts;
use crate::error::FolioError;
use crate::state::menu::{MenuState, MenuVisual};

pub struct MobileMenu {
    state: RefCell<MenuState>,
    button: Element,
    panel: Element,
}

impl MobileMenu {
    /// Wire the trigger, nav links, outside clicks and resize. Returns `None`
    /// when the page has no mobile menu markup.
    ///
    /// # Errors
    ///
    /// Fails if a listener cannot be attached.
    pub fn install(page: &Page) -> Result<Option<Rc<Self>>, FolioError> {
        let (Some(button), Some(panel)) =
            (page.query(consts::MENU_BUTTON_SELECTOR), page.query(consts::NAV_PANEL_SELECTOR))
        else {
            log::debug!("mobile menu markup absent");
            return Ok(None);
        };
        let menu = Rc::new(Self {
            state: RefCell::new(MenuState::new(page.config.menu.breakpoint_px)),
            button,
            panel,
        });

        {
            let button = menu.button.clone();
            let menu = Rc::clone(&menu);
            listen(&button, "click", move |_| {
                let visual = menu.state.borrow_mut().toggle();
                menu.render(visual);
            })?;
        }

        for link in page.query_all(consts::NAV_LINK_SELECTOR) {
            let menu = Rc::clone(&menu);
            let window = page.window.clone();
            listen(&link, "click", move |_| {
                let width = viewport_width(&window);
                let visual = menu.state.borrow_mut().on_link_click(width);
                if let Some(visual) = visual {
                    menu.render(visual);
                }
            })?;
        }

        {
            let menu = Rc::clone(&menu);
            listen(&page.document, "click", move |event| {
                if !menu.state.borrow().is_open() {
                    return;
                }
                let target = event.target();
                let node = target.as_ref().and_then(|t| t.dyn_ref::<Node>());
                let inside_button = menu.button.contains(node);
                let inside_panel = menu.panel.contains(node);
                let visual = menu.state.borrow_mut().on_document_click(inside_button, inside_panel);
                if let Some(visual) = visual {
                    menu.render(visual);
                }
            })?;
        }

        {
            let menu = Rc::clone(&menu);
            let window = page.window.clone();
            listen(&page.window, "resize", move |_| {
                let width = viewport_width(&window);
                let visual = menu.state.borrow_mut().on_resize(width);
                if let Some(visual) = visual {
                    menu.render(visual);
                }
            })?;
        }

        Ok(Some(menu))
    }

    /// Force the menu closed.
    pub fn close(&self) {
        let visual = self.state.borrow_mut().close();
        self.render(visual);
    }

    fn render(&self, visual: MenuVisual) {
        self.panel
            .class_list()
            .toggle_with_force(consts::SHOW_CLASS, visual.panel_shown)
            .log_err("menu panel class");
        match self.button.query_selector("i") {
            Ok(Some(icon)) => icon.set_class_name(visual.icon.class_name()),
            Ok(None) => {}
            Err(err) => log::warn!("menu icon lookup: {err:?}"),
        }
    }
}
