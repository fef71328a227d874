//! Domain primitives and services for the contact book.
//!
//! Purpose: define the contact model, the store that owns the collection,
//! the storage port the store is injected with, and the pure validation
//! rules. Types here are transport agnostic; inbound adapters map them onto
//! HTTP, and outbound adapters implement the ports.
//!
//! Public surface:
//! - [`Contact`]: One entry in the contact book.
//! - [`ContactStore`]: Read-modify-write service over the collection.
//! - [`ports`]: The `ContactStorage` port with its error type and the
//!   in-memory adapter.
//! - [`validate_contact`] / [`FieldError`]: Pure form validation.
//! - [`Error`] / [`ErrorCode`]: Application error payload.
//! - [`RequestId`]: Request-scoped correlation identifier.

pub mod contact;
pub mod contact_store;
pub mod error;
pub mod ports;
pub mod request_id;
pub mod validation;

pub use self::contact::Contact;
pub use self::contact_store::ContactStore;
pub use self::error::{Error, ErrorCode};
pub use self::request_id::{REQUEST_ID_HEADER, RequestId};
pub use self::validation::{FieldError, FieldName, validate_contact};
