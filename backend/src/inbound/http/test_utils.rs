//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::web;

use crate::domain::ports::InMemoryContactStorage;
use crate::domain::{Contact, ContactStore};

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Sets the cookie name to `session` and disables the `Secure` flag for
///   local HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Build shared [`ContactStore`] state over an in-memory collection seeded
/// with `contacts`.
pub fn seeded_store(contacts: Vec<Contact>) -> web::Data<ContactStore> {
    web::Data::new(ContactStore::new(Arc::new(
        InMemoryContactStorage::with_contacts(contacts),
    )))
}
