//! Page-level configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page may embed a `<script type="application/json" id="folio-config">`
//! block to tune thresholds or switch on the dormant modules. Every field has a
//! default, so an absent block, or a block naming only one field, yields the
//! stock behavior. A malformed block is reported and replaced by defaults at
//! boot.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;
use crate::error::FolioError;

/// Complete page configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub menu: MenuConfig,
    pub navigation: NavigationConfig,
    pub header: HeaderConfig,
    pub reveal: RevealConfig,
    pub notifications: NotificationConfig,
    pub features: FeatureFlags,
    pub service_worker_url: String,
    pub preload_images: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            menu: MenuConfig::default(),
            navigation: NavigationConfig::default(),
            header: HeaderConfig::default(),
            reveal: RevealConfig::default(),
            notifications: NotificationConfig::default(),
            features: FeatureFlags::default(),
            service_worker_url: consts::SERVICE_WORKER_URL.to_owned(),
            preload_images: consts::PRELOAD_IMAGES.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}

impl SiteConfig {
    /// Parse a configuration block. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Config`] when `raw` is not valid JSON or a field
    /// has the wrong type.
    pub fn from_json(raw: &str) -> Result<Self, FolioError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MenuConfig {
    /// Widths at or below this use the collapsible mobile menu.
    pub breakpoint_px: f64,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self { breakpoint_px: consts::MOBILE_BREAKPOINT_PX }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavigationConfig {
    pub header_offset_px: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self { header_offset_px: consts::HEADER_OFFSET_PX }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeaderConfig {
    pub scrolled_after_px: f64,
    pub hide_after_px: f64,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            scrolled_after_px: consts::HEADER_SCROLLED_AFTER_PX,
            hide_after_px: consts::HEADER_HIDE_AFTER_PX,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: String,
    pub stagger_ms: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: consts::REVEAL_THRESHOLD,
            root_margin: consts::REVEAL_ROOT_MARGIN.to_owned(),
            stagger_ms: consts::REVEAL_STAGGER_MS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NotificationConfig {
    pub reveal_delay_ms: u32,
    pub auto_dismiss_ms: u32,
    pub exit_ms: u32,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            reveal_delay_ms: consts::NOTIFICATION_REVEAL_DELAY_MS,
            auto_dismiss_ms: consts::NOTIFICATION_AUTO_DISMISS_MS,
            exit_ms: consts::NOTIFICATION_EXIT_MS,
        }
    }
}

/// Switches for the optional modules. Only lazy images are on by default.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeatureFlags {
    pub typing_effect: bool,
    pub skill_bars: bool,
    pub contact_form: bool,
    pub project_filter: bool,
    pub theme_toggle: bool,
    pub lazy_images: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            typing_effect: false,
            skill_bars: false,
            contact_form: false,
            project_filter: false,
            theme_toggle: false,
            lazy_images: true,
        }
    }
}
