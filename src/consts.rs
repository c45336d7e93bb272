//! Presentation contract shared with the page markup and stylesheet.
//!
//! The CSS owns what these classes look like; this crate only adds and removes
//! them. Renaming anything here requires the matching change in the stylesheet.

// ── Navigation ──────────────────────────────────────────────────

/// Same-page anchors handled by smooth scrolling.
pub const FRAGMENT_ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Mobile menu trigger button.
pub const MENU_BUTTON_SELECTOR: &str = ".mobile-menu";

/// Navigation panel toggled by the mobile menu.
pub const NAV_PANEL_SELECTOR: &str = ".nav-links";

/// Links inside the navigation panel.
pub const NAV_LINK_SELECTOR: &str = ".nav-links a";

/// Class that shows a panel or notification.
pub const SHOW_CLASS: &str = "show";

/// Icon glyph while the menu is closed.
pub const MENU_ICON_CLOSED: &str = "fas fa-bars";

/// Icon glyph while the menu is open.
pub const MENU_ICON_OPEN: &str = "fas fa-times";

/// Viewport width at or below which the page uses the mobile layout.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Height of the fixed header subtracted from anchor scroll targets.
pub const HEADER_OFFSET_PX: f64 = 80.0;

// ── Header ──────────────────────────────────────────────────────

/// The page header restyled on scroll.
pub const HEADER_SELECTOR: &str = "header";

/// Offset beyond which the header switches to its scrolled style.
pub const HEADER_SCROLLED_AFTER_PX: f64 = 100.0;

/// Offset beyond which scrolling down hides the header.
pub const HEADER_HIDE_AFTER_PX: f64 = 200.0;

pub const HEADER_BACKGROUND_TOP: &str = "rgba(255, 255, 255, 0.95)";
pub const HEADER_BACKGROUND_SCROLLED: &str = "rgba(255, 255, 255, 0.98)";
pub const HEADER_SHADOW_TOP: &str = "none";
pub const HEADER_SHADOW_SCROLLED: &str = "0 2px 20px rgba(0, 0, 0, 0.1)";
pub const HEADER_TRANSFORM_SHOWN: &str = "translateY(0)";
pub const HEADER_TRANSFORM_HIDDEN: &str = "translateY(-100%)";

// ── Reveal on scroll ────────────────────────────────────────────

/// Element categories that fade in as they enter the viewport.
pub const REVEAL_SELECTORS: [&str; 6] = [
    ".about-card",
    ".expertise-card",
    ".tech-category",
    ".project-card",
    ".timeline-item",
    ".contact-method",
];

/// Marker applied to every tracked element so the CSS can set its start state.
pub const ANIMATE_ON_SCROLL_CLASS: &str = "animate-on-scroll";

/// Class applied once an element has been revealed.
pub const VISIBLE_CLASS: &str = "visible";

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_STAGGER_MS: u32 = 100;

// ── Notifications ───────────────────────────────────────────────

pub const NOTIFICATION_CLASS: &str = "notification";
pub const NOTIFICATION_CONTENT_CLASS: &str = "notification-content";
pub const NOTIFICATION_CLOSE_CLASS: &str = "notification-close";
pub const NOTIFICATION_CLOSE_ICON: &str = "fas fa-times";

/// Delay between inserting a toast and adding [`SHOW_CLASS`], so the entrance
/// transition sees two distinct states.
pub const NOTIFICATION_REVEAL_DELAY_MS: u32 = 100;
pub const NOTIFICATION_AUTO_DISMISS_MS: u32 = 5000;
pub const NOTIFICATION_EXIT_MS: u32 = 300;

// ── Loading bar ─────────────────────────────────────────────────

pub const LOADING_BAR_ID: &str = "loadingBar";
pub const LOADING_COMPLETE_CLASS: &str = "complete";
pub const LOADING_BAR_HIDE_DELAY_MS: u32 = 300;

// ── Optional modules ────────────────────────────────────────────

pub const HERO_TITLE_SELECTOR: &str = ".hero-text h1";
pub const TYPING_START_DELAY_MS: u32 = 500;
pub const TYPING_STEP_MS: u32 = 50;

pub const SKILL_BAR_SELECTOR: &str = ".skill-progress";
pub const SKILL_FILL_SELECTOR: &str = ".progress-fill";
pub const SKILL_PERCENTAGE_ATTR: &str = "data-percentage";
pub const SKILL_FILL_DELAY_MS: u32 = 200;

pub const CONTACT_FORM_SELECTOR: &str = "#contact-form";

pub const FILTER_BUTTON_SELECTOR: &str = ".filter-btn";
pub const FILTER_ATTR: &str = "data-filter";
pub const FILTER_ALL: &str = "all";
pub const PROJECT_CARD_SELECTOR: &str = ".project-card";
pub const CATEGORIES_ATTR: &str = "data-categories";
pub const ACTIVE_CLASS: &str = "active";
pub const FILTER_FADE_IN_MS: u32 = 100;
pub const FILTER_FADE_OUT_MS: u32 = 300;

pub const THEME_TOGGLE_SELECTOR: &str = "#theme-toggle";
pub const THEME_STORAGE_KEY: &str = "theme";
pub const THEME_ATTR: &str = "data-theme";
pub const THEME_ICON_LIGHT: &str = "fas fa-moon";
pub const THEME_ICON_DARK: &str = "fas fa-sun";

pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";
pub const LAZY_SOURCE_ATTR: &str = "data-src";
pub const LAZY_CLASS: &str = "lazy";

// ── Analytics ───────────────────────────────────────────────────

pub const PROJECT_LINK_SELECTOR: &str = ".project-link";
pub const CONTACT_LINK_SELECTOR: &str = ".contact-method a";
pub const PRIMARY_BUTTON_SELECTOR: &str = ".btn-primary";

// ── Boot ────────────────────────────────────────────────────────

/// Inline `<script type="application/json">` block holding a `SiteConfig`.
pub const CONFIG_ELEMENT_ID: &str = "folio-config";
pub const SERVICE_WORKER_URL: &str = "/sw.js";
pub const PRELOAD_IMAGES: [&str; 1] = ["images/profile.jpg"];
