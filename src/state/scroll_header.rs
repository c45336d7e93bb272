//! Scroll-aware header state.
//!
//! Scroll events only arm a frame request; the header is restyled inside the
//! animation-frame callback using the offset read at that moment. A burst of
//! scroll events within one frame therefore produces a single update carrying
//! the latest position.

#[cfg(test)]
#[path = "scroll_header_test.rs"]
mod scroll_header_test;

use crate::config::HeaderConfig;
use crate::consts;

/// Background and shadow variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderAppearance {
    /// Near the top of the page.
    Top,
    /// Past the scrolled threshold.
    Scrolled,
}

impl HeaderAppearance {
    #[must_use]
    pub fn background(self) -> &'static str {
        match self {
            Self::Top => consts::HEADER_BACKGROUND_TOP,
            Self::Scrolled => consts::HEADER_BACKGROUND_SCROLLED,
        }
    }

    #[must_use]
    pub fn box_shadow(self) -> &'static str {
        match self {
            Self::Top => consts::HEADER_SHADOW_TOP,
            Self::Scrolled => consts::HEADER_SHADOW_SCROLLED,
        }
    }
}

/// Whether the header is translated on or off screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderVisibility {
    Shown,
    Hidden,
}

impl HeaderVisibility {
    #[must_use]
    pub fn transform(self) -> &'static str {
        match self {
            Self::Shown => consts::HEADER_TRANSFORM_SHOWN,
            Self::Hidden => consts::HEADER_TRANSFORM_HIDDEN,
        }
    }
}

/// One header restyle, applied in a single frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderStyle {
    pub appearance: HeaderAppearance,
    pub visibility: HeaderVisibility,
}

#[derive(Clone, Debug)]
pub struct ScrollHeader {
    last_scroll_top: f64,
    pending_frame: bool,
    thresholds: HeaderConfig,
}

impl Default for ScrollHeader {
    fn default() -> Self {
        Self::new(HeaderConfig::default())
    }
}

impl ScrollHeader {
    #[must_use]
    pub fn new(thresholds: HeaderConfig) -> Self {
        Self { last_scroll_top: 0.0, pending_frame: false, thresholds }
    }

    #[must_use]
    pub fn last_scroll_top(&self) -> f64 {
        self.last_scroll_top
    }

    #[must_use]
    pub fn frame_pending(&self) -> bool {
        self.pending_frame
    }

    /// A scroll event fired. Returns `true` when the host must request an
    /// animation frame; `false` when one is already on its way.
    pub fn on_scroll(&mut self) -> bool {
        if self.pending_frame {
            return false;
        }
        self.pending_frame = true;
        true
    }

    /// The host could not schedule a frame. Clears the guard so the host can
    /// apply [`Self::on_frame`] synchronously.
    pub fn frame_unavailable(&mut self) {
        self.pending_frame = false;
    }

    /// The animation frame arrived with the current vertical offset.
    pub fn on_frame(&mut self, scroll_top: f64) -> HeaderStyle {
        let appearance = if scroll_top > self.thresholds.scrolled_after_px {
            HeaderAppearance::Scrolled
        } else {
            HeaderAppearance::Top
        };
        let scrolling_down = scroll_top > self.last_scroll_top;
        let visibility = if scrolling_down && scroll_top > self.thresholds.hide_after_px {
            HeaderVisibility::Hidden
        } else {
            HeaderVisibility::Shown
        };
        self.last_scroll_top = scroll_top;
        self.pending_frame = false;
        HeaderStyle { appearance, visibility }
    }
}
