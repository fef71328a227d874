//! Pure contact validation.
//!
//! Checks are syntactic only and return every failure at once so forms can
//! list them all in a single render. The duplicate-name rule needs the
//! store, so handlers compose it separately via
//! [`FieldError::duplicate_name`] before mutating anything.

use std::sync::OnceLock;

use regex::Regex;

use super::Contact;

/// Longest accepted email address, per RFC 5321's path limit.
const EMAIL_MAX_LEN: usize = 254;

/// Form fields a validation error can attach to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldName {
    /// The contact's display name.
    Name,
    /// The contact's email address.
    Email,
    /// The contact's mobile phone number.
    Phone,
}

impl FieldName {
    /// Lower-case identifier matching the form input names.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }
}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single failed check, addressed to one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field the message belongs to.
    pub field: FieldName,
    /// Human-readable explanation rendered next to the form.
    pub message: String,
}

impl FieldError {
    /// Construct an error for the given field.
    #[must_use]
    pub fn new(field: FieldName, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// The duplicate-name failure, composed by handlers after probing the
    /// store with a case-sensitive existence check.
    #[must_use]
    pub fn duplicate_name(name: &str) -> Self {
        Self::new(FieldName::Name, format!("\"{name}\" is already in use"))
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // One @, no whitespace, dotted domain. Length is enforced separately.
        let pattern = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

static PHONE_RE: OnceLock<Regex> = OnceLock::new();

fn phone_regex() -> &'static Regex {
    PHONE_RE.get_or_init(|| {
        // Local (Indonesian) mobile numbers: +62/62 or a leading 0, then a
        // provider prefix starting with 8, nine to thirteen digits overall.
        let pattern = r"^(?:\+62|62|0)8[1-9][0-9]{6,10}$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("phone regex failed to compile: {error}"))
    })
}

fn is_valid_email(value: &str) -> bool {
    value.len() <= EMAIL_MAX_LEN && email_regex().is_match(value)
}

fn is_valid_mobile_phone(value: &str) -> bool {
    phone_regex().is_match(value)
}

/// Run every syntactic check against a candidate contact.
///
/// Returns an empty list when the candidate is acceptable. Never consults
/// the store; uniqueness is a separate, composed check.
///
/// # Examples
/// ```
/// use contactbook::domain::{Contact, validate_contact};
///
/// let candidate = Contact::new("Ana", "not-an-email", "081234567890");
/// let errors = validate_contact(&candidate);
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors[0].field.as_str(), "email");
/// ```
#[must_use]
pub fn validate_contact(candidate: &Contact) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if candidate.name.trim().is_empty() {
        errors.push(FieldError::new(FieldName::Name, "Name must not be blank."));
    }
    if !is_valid_email(&candidate.email) {
        errors.push(FieldError::new(
            FieldName::Email,
            "Enter a valid email address.",
        ));
    }
    if !is_valid_mobile_phone(&candidate.phone) {
        errors.push(FieldError::new(
            FieldName::Phone,
            "Enter a valid mobile phone number.",
        ));
    }
    errors
}

#[cfg(test)]
mod tests {
    //! Case tables for the syntactic rules.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ana@example.com", true)]
    #[case("a@b.co", true)]
    #[case("first.last@sub.domain.org", true)]
    #[case("nope", false)]
    #[case("a@b", false)]
    #[case("a b@example.com", false)]
    #[case("a@exa mple.com", false)]
    #[case("@example.com", false)]
    #[case("", false)]
    fn email_rule(#[case] value: &str, #[case] valid: bool) {
        assert_eq!(is_valid_email(value), valid, "email: {value:?}");
    }

    #[test]
    fn email_rule_caps_length() {
        let local = "a".repeat(EMAIL_MAX_LEN);
        let overlong = format!("{local}@example.com");
        assert!(!is_valid_email(&overlong));
    }

    #[rstest]
    #[case("081234567890", true)]
    #[case("08123456789", true)]
    #[case("+6281234567890", true)]
    #[case("6281234567890", true)]
    #[case("0812345678901", true)]
    #[case("8123456789", false)]
    #[case("0712345678", false)]
    #[case("08123", false)]
    #[case("08123456789012345", false)]
    #[case("08a234567890", false)]
    #[case("", false)]
    fn phone_rule(#[case] value: &str, #[case] valid: bool) {
        assert_eq!(is_valid_mobile_phone(value), valid, "phone: {value:?}");
    }

    #[rstest]
    #[case("Ana", 0)]
    #[case("", 1)]
    #[case("   ", 1)]
    fn name_rule(#[case] name: &str, #[case] expected_errors: usize) {
        let candidate = Contact::new(name, "ana@example.com", "081234567890");
        assert_eq!(validate_contact(&candidate).len(), expected_errors);
    }

    #[test]
    fn all_failures_are_reported_together() {
        let candidate = Contact::new(" ", "broken", "12345");
        let fields: Vec<FieldName> = validate_contact(&candidate)
            .into_iter()
            .map(|e| e.field)
            .collect();
        assert_eq!(fields, [FieldName::Name, FieldName::Email, FieldName::Phone]);
    }

    #[test]
    fn valid_contacts_produce_no_errors() {
        let candidate = Contact::new("Ana", "ana@example.com", "081234567890");
        assert!(validate_contact(&candidate).is_empty());
    }

    #[test]
    fn duplicate_name_targets_the_name_field() {
        let err = FieldError::duplicate_name("Ana");
        assert_eq!(err.field, FieldName::Name);
        assert!(err.message.contains("Ana"));
    }
}
