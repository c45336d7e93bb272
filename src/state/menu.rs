//! Mobile navigation menu open/closed state.
//!
//! The panel class and the trigger glyph are derived from `is_open` on every
//! transition and never stored separately, so they cannot drift apart.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::consts;

/// Trigger button glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuIcon {
    /// Hamburger, shown while closed.
    Bars,
    /// Cross, shown while open.
    Times,
}

impl MenuIcon {
    /// Class list for the `<i>` element inside the trigger.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Bars => consts::MENU_ICON_CLOSED,
            Self::Times => consts::MENU_ICON_OPEN,
        }
    }
}

/// What the panel and trigger should look like.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuVisual {
    pub panel_shown: bool,
    pub icon: MenuIcon,
}

impl MenuVisual {
    #[must_use]
    pub fn for_open(is_open: bool) -> Self {
        Self {
            panel_shown: is_open,
            icon: if is_open { MenuIcon::Times } else { MenuIcon::Bars },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MenuState {
    is_open: bool,
    breakpoint_px: f64,
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new(consts::MOBILE_BREAKPOINT_PX)
    }
}

impl MenuState {
    #[must_use]
    pub fn new(breakpoint_px: f64) -> Self {
        Self { is_open: false, breakpoint_px }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    #[must_use]
    pub fn visual(&self) -> MenuVisual {
        MenuVisual::for_open(self.is_open)
    }

    /// Flip the menu. Bound to the trigger button.
    pub fn toggle(&mut self) -> MenuVisual {
        self.is_open = !self.is_open;
        self.visual()
    }

    /// Force the menu closed. Repeated calls yield the same visual.
    pub fn close(&mut self) -> MenuVisual {
        self.is_open = false;
        self.visual()
    }

    /// A navigation link was clicked. Closes only in the mobile layout.
    pub fn on_link_click(&mut self, viewport_width: f64) -> Option<MenuVisual> {
        (viewport_width <= self.breakpoint_px).then(|| self.close())
    }

    /// A click landed somewhere on the document.
    ///
    /// Returns `None` while closed so idle clicks cause no DOM writes.
    pub fn on_document_click(&mut self, inside_button: bool, inside_panel: bool) -> Option<MenuVisual> {
        if !self.is_open || inside_button || inside_panel {
            return None;
        }
        Some(self.close())
    }

    /// The viewport was resized. Widening past the breakpoint always closes.
    pub fn on_resize(&mut self, viewport_width: f64) -> Option<MenuVisual> {
        (viewport_width > self.breakpoint_px).then(|| self.close())
    }
}
