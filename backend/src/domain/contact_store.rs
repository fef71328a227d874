//! Contact store service.
//!
//! Owns all read and write access to the contact collection. Every mutation
//! is a full read-modify-write cycle through the [`ContactStorage`] port:
//! load the whole collection, transform it in memory, persist the result as
//! one unit. The collection is assumed small enough to make these cycles
//! cheap.
//!
//! Mutations serialise through an in-process mutex, so two handlers in the
//! same process cannot interleave their cycles. Writers in other processes
//! remain unsynchronised; the last write wins.

use std::sync::Arc;

use tokio::sync::Mutex;

use super::Contact;
use super::ports::{ContactStorage, StorageError};

/// Service owning the contact collection.
///
/// Lookups and duplicate checks intentionally disagree about case:
/// [`ContactStore::find_by_name`] matches ignoring case while
/// [`ContactStore::exists_by_name`] compares exactly. A collection holding
/// `"ana"` therefore satisfies a lookup for `"Ana"` even though `"Ana"`
/// passes the duplicate check and can be added alongside it. This mirrors
/// the behaviour of the data files the application inherits and is pinned by
/// tests; do not "fix" one side without the other.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use contactbook::domain::{Contact, ContactStore};
/// use contactbook::domain::ports::{InMemoryContactStorage, StorageError};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let store = ContactStore::new(Arc::new(InMemoryContactStorage::default()));
/// store.ensure_exists().await?;
/// store
///     .add(Contact::new("Ana", "ana@example.com", "081234567890"))
///     .await?;
/// assert!(store.find_by_name("ANA").await?.is_some());
/// # Ok::<(), StorageError>(())
/// # }).unwrap();
/// ```
pub struct ContactStore {
    storage: Arc<dyn ContactStorage>,
    write_guard: Mutex<()>,
}

impl ContactStore {
    /// Create a store over the given storage adapter.
    #[must_use]
    pub fn new(storage: Arc<dyn ContactStorage>) -> Self {
        Self {
            storage,
            write_guard: Mutex::new(()),
        }
    }

    /// Create the backing collection if it does not exist yet.
    ///
    /// Idempotent; safe to run at every startup. This is the only place
    /// where a missing collection is masked rather than surfaced.
    ///
    /// # Errors
    /// Propagates adapter failures other than "collection absent".
    pub async fn ensure_exists(&self) -> Result<(), StorageError> {
        self.storage.ensure_exists().await
    }

    /// Read the entire collection in storage order.
    ///
    /// # Errors
    /// [`StorageError::Read`] when the collection is missing or malformed.
    pub async fn load_all(&self) -> Result<Vec<Contact>, StorageError> {
        self.storage.load().await
    }

    /// First contact whose name matches ignoring case, or `None`.
    ///
    /// # Errors
    /// Propagates read failures from the adapter.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Contact>, StorageError> {
        let contacts = self.storage.load().await?;
        Ok(contacts.into_iter().find(|c| c.name_matches(name)))
    }

    /// Whether a contact with exactly this name exists (case-sensitive).
    ///
    /// This is the duplicate-prevention probe used before add and update.
    /// Note the deliberate asymmetry with [`ContactStore::find_by_name`].
    ///
    /// # Errors
    /// Propagates read failures from the adapter.
    pub async fn exists_by_name(&self, name: &str) -> Result<bool, StorageError> {
        let contacts = self.storage.load().await?;
        Ok(contacts.iter().any(|c| c.name_is_exactly(name)))
    }

    /// Append a contact and persist the collection.
    ///
    /// Performs no duplicate check; callers validate first.
    ///
    /// # Errors
    /// Propagates read or write failures; on failure nothing is persisted.
    pub async fn add(&self, contact: Contact) -> Result<(), StorageError> {
        let _guard = self.write_guard.lock().await;
        let mut contacts = self.storage.load().await?;
        contacts.push(contact);
        self.storage.save(contacts).await
    }

    /// Remove every contact whose name matches exactly, then persist.
    ///
    /// Removing an absent name is a silent no-op: the collection is written
    /// back unchanged and the call reports success.
    ///
    /// # Errors
    /// Propagates read or write failures.
    pub async fn delete(&self, name: &str) -> Result<(), StorageError> {
        let _guard = self.write_guard.lock().await;
        let mut contacts = self.storage.load().await?;
        contacts.retain(|c| !c.name_is_exactly(name));
        self.storage.save(contacts).await
    }

    /// Replace the contact stored under `old_name` with `replacement`.
    ///
    /// Removes every exact match for `old_name`, appends `replacement`, and
    /// persists. The replacement therefore moves to the end of the
    /// collection. When `old_name` matches nothing the operation degenerates
    /// to an append; that is not an error.
    ///
    /// # Errors
    /// Propagates read or write failures.
    pub async fn update(&self, old_name: &str, replacement: Contact) -> Result<(), StorageError> {
        let _guard = self.write_guard.lock().await;
        let mut contacts = self.storage.load().await?;
        contacts.retain(|c| !c.name_is_exactly(old_name));
        contacts.push(replacement);
        self.storage.save(contacts).await
    }

    /// Persist the supplied collection, replacing the stored one entirely.
    ///
    /// # Errors
    /// Propagates write failures from the adapter.
    pub async fn save(&self, contacts: Vec<Contact>) -> Result<(), StorageError> {
        let _guard = self.write_guard.lock().await;
        self.storage.save(contacts).await
    }
}

#[cfg(test)]
#[path = "contact_store_tests.rs"]
mod tests;
