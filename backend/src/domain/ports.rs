//! Domain ports defining the edges of the hexagon.
//!
//! The contact store reaches its backing medium through the
//! [`ContactStorage`] port, so tests can substitute an in-memory adapter and
//! the persistence format stays an adapter concern. The port exposes a
//! strongly typed error so adapters map their failures into predictable
//! variants instead of returning `anyhow::Result`.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use thiserror::Error;

use super::Contact;

/// Errors surfaced by [`ContactStorage`] adapters.
///
/// Absence of a particular contact is never an error at this layer; lookups
/// return `Option`. These variants cover the backing medium itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The collection could not be read: missing backing file, an I/O
    /// failure, or content that does not parse as a contact collection.
    #[error("reading contact collection at {path} failed: {message}")]
    Read {
        /// Location of the backing collection.
        path: String,
        /// Adapter-specific failure detail.
        message: String,
    },
    /// The collection could not be written.
    #[error("writing contact collection at {path} failed: {message}")]
    Write {
        /// Location of the backing collection.
        path: String,
        /// Adapter-specific failure detail.
        message: String,
    },
}

impl StorageError {
    /// Helper for read-side failures.
    pub fn read(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Read {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Helper for write-side failures.
    pub fn write(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Write {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Storage port for the contact collection.
///
/// Adapters persist the collection as one unit: `load` returns the whole
/// ordered collection and `save` replaces it entirely. `ensure_exists`
/// idempotently provisions an empty collection so a fresh deployment starts
/// from `[]` rather than a read failure.
///
/// # Examples
/// ```
/// use contactbook::domain::Contact;
/// use contactbook::domain::ports::{ContactStorage, InMemoryContactStorage, StorageError};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let storage = InMemoryContactStorage::default();
/// storage.ensure_exists().await?;
/// storage
///     .save(vec![Contact::new("Ana", "ana@example.com", "081234567890")])
///     .await?;
/// assert_eq!(storage.load().await?.len(), 1);
/// # Ok::<(), StorageError>(())
/// # }).unwrap();
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactStorage: Send + Sync {
    /// Create the backing collection if it does not exist yet.
    ///
    /// Must never truncate an existing collection; calling it repeatedly is
    /// safe.
    async fn ensure_exists(&self) -> Result<(), StorageError>;

    /// Read the entire collection in storage order.
    async fn load(&self) -> Result<Vec<Contact>, StorageError>;

    /// Replace the entire collection with the supplied one.
    async fn save(&self, contacts: Vec<Contact>) -> Result<(), StorageError>;
}

/// In-memory [`ContactStorage`] adapter.
///
/// Behaves like the file-backed adapter, including the missing-collection
/// read failure before [`ContactStorage::ensure_exists`] has run. Used by
/// unit tests and available to callers that want a throwaway store.
#[derive(Debug, Default)]
pub struct InMemoryContactStorage {
    collection: Mutex<Option<Vec<Contact>>>,
}

impl InMemoryContactStorage {
    /// Adapter seeded with an existing collection.
    #[must_use]
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            collection: Mutex::new(Some(contacts)),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<Vec<Contact>>> {
        self.collection
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl ContactStorage for InMemoryContactStorage {
    async fn ensure_exists(&self) -> Result<(), StorageError> {
        let mut guard = self.lock();
        if guard.is_none() {
            *guard = Some(Vec::new());
        }
        Ok(())
    }

    async fn load(&self) -> Result<Vec<Contact>, StorageError> {
        self.lock()
            .clone()
            .ok_or_else(|| StorageError::read("<memory>", "collection has not been created"))
    }

    async fn save(&self, contacts: Vec<Contact>) -> Result<(), StorageError> {
        *self.lock() = Some(contacts);
        Ok(())
    }
}
