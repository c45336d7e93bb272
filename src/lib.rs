//! # folio
//!
//! Client-side behavior layer for a static portfolio page, compiled to
//! WebAssembly. The HTML and CSS are authored by hand; this crate only attaches
//! behavior to them: smooth anchor navigation, the mobile menu, the
//! scroll-aware header, reveal-on-scroll animations, toast notifications and a
//! handful of opt-in extras (typing effect, skill bars, contact form, project
//! filter, theme toggle, lazy images).
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | Pure, browser-free state machines, one per component |
//! | [`util`] | Pure helpers (anchor math, form validation, analytics mapping) |
//! | [`config`] | Page-level tuning loaded from an inline JSON block |
//! | [`consts`] | Selectors, class names and default timings shared with the CSS |
//! | [`error`] | Crate error types |
//! | `controllers` | DOM glue for each component (`hydrate` only) |
//! | `app` | Startup and load-complete hooks, wasm entry (`hydrate` only) |
//!
//! Everything outside `controllers` and `app` compiles natively so the
//! behavior can be tested without a browser.

pub mod config;
pub mod consts;
pub mod error;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod app;
#[cfg(feature = "hydrate")]
pub mod controllers;

#[cfg(test)]
mod test_clock;
