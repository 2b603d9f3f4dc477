use std::collections::BTreeMap;

use regex::Regex;
use serde::Deserialize;

/// Permissive shape check: single `@`, no whitespace, at least one `.` in
/// the domain part. Deliberately not RFC 5322.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// A contact form as submitted by a client. Absent JSON fields deserialize
/// to empty strings so they fail the same checks as blank input.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Per-field validation messages, keyed by field name.
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

pub fn is_valid_email(email: &str) -> bool {
    Regex::new(EMAIL_PATTERN)
        .expect("Invalid email regex")
        .is_match(email)
}

/// The presence check the endpoint enforces: any of the four fields empty,
/// untrimmed. Looser than [`validate`]; whitespace-only fields pass here.
pub fn has_missing_field(form: &ContactForm) -> bool {
    form.name.is_empty()
        || form.email.is_empty()
        || form.subject.is_empty()
        || form.message.is_empty()
}

/// Full form validation as presented to users filling in the form. Fields
/// are trimmed before the emptiness check; the message must be at least 10
/// characters after trimming.
pub fn validate(form: &ContactForm) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    if form.name.trim().is_empty() {
        errors.insert("name", "Name is required");
    }

    if form.email.trim().is_empty() {
        errors.insert("email", "Email is required");
    } else if !is_valid_email(&form.email) {
        errors.insert("email", "Please enter a valid email address");
    }

    if form.subject.trim().is_empty() {
        errors.insert("subject", "Subject is required");
    }

    if form.message.trim().is_empty() {
        errors.insert("message", "Message is required");
    } else if form.message.trim().chars().count() < 10 {
        errors.insert("message", "Message must be at least 10 characters");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            subject: "Test Subject".to_string(),
            message: "This is a test message for the contact form".to_string(),
        }
    }

    #[test]
    fn accepts_valid_form() {
        assert_eq!(validate(&valid_form()), Ok(()));
    }

    #[test]
    fn rejects_empty_fields() {
        let errors = validate(&ContactForm::default()).unwrap_err();
        assert_eq!(errors["name"], "Name is required");
        assert_eq!(errors["email"], "Email is required");
        assert_eq!(errors["subject"], "Subject is required");
        assert_eq!(errors["message"], "Message is required");
    }

    #[test]
    fn trims_before_emptiness_check() {
        let mut form = valid_form();
        form.name = "   ".to_string();
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors["name"], "Name is required");
    }

    #[test]
    fn rejects_short_message() {
        let mut form = valid_form();
        form.message = "  too short  ".to_string();
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors["message"], "Message must be at least 10 characters");
    }

    #[test]
    fn message_length_counts_trimmed_characters() {
        let mut form = valid_form();
        form.message = "0123456789".to_string();
        assert_eq!(validate(&form), Ok(()));
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("test@example.com"));
        assert!(is_valid_email("a.b+c@sub.domain.org"));
        assert!(!is_valid_email("invalid-email"));
        assert!(!is_valid_email("no-at.example.com"));
        assert!(!is_valid_email("missing@dot"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("spaces in@example.com"));
    }

    #[test]
    fn rejects_malformed_email_with_message() {
        let mut form = valid_form();
        form.email = "invalid-email".to_string();
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors["email"], "Please enter a valid email address");
    }

    #[test]
    fn presence_check_is_untrimmed() {
        let mut form = valid_form();
        form.subject = " ".to_string();
        assert!(!has_missing_field(&form));

        form.subject = String::new();
        assert!(has_missing_field(&form));
    }
}
