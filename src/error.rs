//! Crate error types.
//!
//! Nothing here is ever fatal to the page. Controllers return [`FolioError`]
//! to the startup hook, which logs it and moves on to the next component.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure while wiring or driving a component.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    /// An element the component cannot work without is absent.
    #[error("required element not found: {0}")]
    MissingElement(&'static str),
    /// A browser API call rejected or threw.
    #[error("browser call failed: {0}")]
    Browser(String),
    /// The inline page configuration could not be parsed.
    #[error("invalid page configuration: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for FolioError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Browser(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// Contact form rejection. The display text is shown to the visitor as-is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields.")]
    MissingFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}
