use super::*;

fn submission(name: &str, email: &str, message: &str) -> ContactSubmission {
    ContactSubmission { name: name.to_owned(), email: email.to_owned(), message: message.to_owned() }
}

#[test]
fn empty_name_is_missing_fields() {
    assert_eq!(submission("", "a@b.com", "hi").validate(), Err(ValidationError::MissingFields));
}

#[test]
fn whitespace_only_counts_as_empty() {
    assert_eq!(submission("A", "a@b.com", "   ").validate(), Err(ValidationError::MissingFields));
}

#[test]
fn missing_fields_take_precedence_over_email_shape() {
    assert_eq!(submission("A", "nope", "").validate(), Err(ValidationError::MissingFields));
}

#[test]
fn malformed_email_is_rejected() {
    assert_eq!(submission("A", "not-an-email", "hi").validate(), Err(ValidationError::InvalidEmail));
}

#[test]
fn complete_submission_passes() {
    assert_eq!(submission("A", "a@b.com", "hi").validate(), Ok(()));
}

#[test]
fn email_shapes() {
    assert!(is_valid_email("jane.doe@example.co.uk"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("a b@c.com"));
    assert!(!is_valid_email("a@@b.com"));
    assert!(!is_valid_email("@b.com"));
}
