//! Contact domain model.
//!
//! A contact is a flat record of name, email address, and phone number. The
//! name doubles as the collection key: lookups match it case-insensitively
//! while duplicate checks compare it exactly. Both behaviours are inherited
//! from the data files this application reads and are pinned by tests.

use serde::{Deserialize, Serialize};

/// A single entry in the contact book.
///
/// ## Serialisation contract
/// Fields serialise as `name`, `email`, and `phone`. Deserialisation also
/// accepts the legacy spellings `nama` and `nohp`, so collection files written
/// by earlier releases load unchanged and are rewritten in the canonical form
/// on the next save.
///
/// # Examples
/// ```
/// use contactbook::domain::Contact;
///
/// let ana: Contact = serde_json::from_str(
///     r#"{"nama": "Ana", "email": "ana@example.com", "nohp": "081234567890"}"#,
/// )?;
/// assert_eq!(ana.name, "Ana");
/// assert_eq!(ana.phone, "081234567890");
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Display name; unique within a collection when compared exactly.
    #[serde(alias = "nama")]
    pub name: String,
    /// Email address.
    pub email: String,
    /// Mobile phone number in local notation.
    #[serde(alias = "nohp")]
    pub phone: String,
}

impl Contact {
    /// Construct a contact from owned field values.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// Case-insensitive name match used by lookups.
    ///
    /// Both sides are lowercased, so a probe of `"Ana"` matches a stored
    /// `"ana"`.
    #[must_use]
    pub fn name_matches(&self, probe: &str) -> bool {
        self.name.to_lowercase() == probe.to_lowercase()
    }

    /// Exact name match used by duplicate checks and removals.
    ///
    /// Deliberately stricter than [`Contact::name_matches`]; see
    /// [`ContactStore::exists_by_name`](crate::domain::ContactStore::exists_by_name)
    /// for the consequences.
    #[must_use]
    pub fn name_is_exactly(&self, probe: &str) -> bool {
        self.name == probe
    }
}
