//! Per-component state machines.
//!
//! DESIGN
//! ======
//! Each module holds the state of one page component and exposes named
//! transition functions. Transitions return what the DOM layer has to do
//! instead of doing it, so ordering, debounce and timer-cancellation rules can
//! be checked without a browser.

pub mod menu;
pub mod notification;
pub mod observe_once;
pub mod project_filter;
pub mod reveal;
pub mod scroll_header;
pub mod theme;
pub mod typing;
