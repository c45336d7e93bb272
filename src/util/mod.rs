//! Pure helpers shared by the DOM controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Parsing and mapping rules live here, away from web-sys glue, so they can
//! be unit tested natively.

pub mod analytics;
pub mod anchor;
pub mod contact_form;
pub mod skill_bar;
