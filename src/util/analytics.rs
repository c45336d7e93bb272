//! Click tracking payloads for the page's analytics tag.
//!
//! The tag is optional. Mapping a click to an event is pure; the controller
//! forwards it to `gtag` only when the page defines one.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use serde::Serialize;

/// Kind of element that received a tracked click.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TrackedClick {
    /// `.project-link`, carrying its resolved absolute URL.
    ProjectLink(Option<String>),
    /// `.contact-method a`, carrying its resolved absolute URL.
    ContactLink(Option<String>),
    /// `.btn-primary`, carrying its text content.
    PrimaryButton(String),
}

/// Parameters object passed as the third `gtag('event', …)` argument.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EventParams {
    pub event_category: &'static str,
    pub event_label: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalyticsEvent {
    pub action: &'static str,
    pub params: EventParams,
}

impl AnalyticsEvent {
    #[must_use]
    pub fn new(category: &'static str, action: &'static str, label: Option<String>) -> Self {
        Self { action, params: EventParams { event_category: category, event_label: label } }
    }

    /// JSON form of [`EventParams`], parsed into a JS object by the caller.
    ///
    /// # Errors
    ///
    /// Propagates serialization failures from `serde_json`.
    pub fn params_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.params)
    }
}

impl From<TrackedClick> for AnalyticsEvent {
    fn from(click: TrackedClick) -> Self {
        match click {
            TrackedClick::ProjectLink(href) => Self::new("Projects", "view_project", href),
            TrackedClick::ContactLink(href) => Self::new("Contact", "contact_click", href),
            TrackedClick::PrimaryButton(text) => Self::new("CTA", "primary_button_click", Some(text.trim().to_owned())),
        }
    }
}
