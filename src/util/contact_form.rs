//! Contact form validation. Submission is simulated; nothing leaves the page.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;

/// Shown after a submission passes validation.
pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";

/// `local@domain.tld` with no whitespace and a single `@`.
static EMAIL_RE: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"));

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// Check required fields first, then the email shape.
    ///
    /// # Errors
    ///
    /// [`ValidationError::MissingFields`] if any field is blank,
    /// [`ValidationError::InvalidEmail`] if the address is malformed.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if [&self.name, &self.email, &self.message].iter().any(|f| f.trim().is_empty()) {
            return Err(ValidationError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    match EMAIL_RE.as_ref() {
        Ok(re) => re.is_match(email),
        Err(_) => false,
    }
}
