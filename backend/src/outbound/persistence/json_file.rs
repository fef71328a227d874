//! File-backed contact storage.
//!
//! Persists the collection as one JSON array in a single file under the
//! configured data directory. Saves are staged to a temporary name in the
//! same directory and renamed over the target, so a crash mid-write never
//! leaves a half-written collection behind. The collection is small, so
//! reads and writes complete quickly and run inline.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use cap_std::{ambient_authority, fs::Dir};
use uuid::Uuid;

use crate::domain::Contact;
use crate::domain::ports::{ContactStorage, StorageError};

/// Name of the collection file inside the data directory.
pub const COLLECTION_FILE: &str = "contacts.json";

/// Serialized form of an empty collection, seeded on first start.
const EMPTY_COLLECTION: &[u8] = b"[]";

/// [`ContactStorage`] adapter storing the collection in a JSON file.
///
/// # Examples
/// ```no_run
/// use contactbook::domain::ports::ContactStorage;
/// use contactbook::outbound::persistence::JsonFileStorage;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let storage = JsonFileStorage::new("./data");
/// storage.ensure_exists().await?;
/// let contacts = storage.load().await?;
/// # Ok::<(), contactbook::domain::ports::StorageError>(())
/// # }).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    data_dir: PathBuf,
}

impl JsonFileStorage {
    /// Adapter rooted at the given data directory.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Full path of the collection file, for logs and error context.
    #[must_use]
    pub fn collection_path(&self) -> PathBuf {
        self.data_dir.join(COLLECTION_FILE)
    }

    fn path_context(&self) -> String {
        self.collection_path().display().to_string()
    }

    fn open_data_dir(&self) -> io::Result<Dir> {
        Dir::open_ambient_dir(&self.data_dir, ambient_authority())
    }

    fn replace_collection(&self, dir: &Dir, staged: &Path) -> Result<(), StorageError> {
        match dir.remove_file(COLLECTION_FILE) {
            Ok(()) => {}
            Err(error) if error.kind() == io::ErrorKind::NotFound => {}
            Err(error) => return Err(StorageError::write(self.path_context(), error.to_string())),
        }
        dir.rename(staged, dir, Path::new(COLLECTION_FILE))
            .map_err(|error| StorageError::write(self.path_context(), error.to_string()))
    }
}

#[async_trait]
impl ContactStorage for JsonFileStorage {
    async fn ensure_exists(&self) -> Result<(), StorageError> {
        Dir::create_ambient_dir_all(&self.data_dir, ambient_authority())
            .map_err(|error| StorageError::write(self.data_dir.display().to_string(), error.to_string()))?;
        let dir = self
            .open_data_dir()
            .map_err(|error| StorageError::write(self.data_dir.display().to_string(), error.to_string()))?;
        if !dir.is_file(COLLECTION_FILE) {
            dir.write(COLLECTION_FILE, EMPTY_COLLECTION)
                .map_err(|error| StorageError::write(self.path_context(), error.to_string()))?;
        }
        Ok(())
    }

    async fn load(&self) -> Result<Vec<Contact>, StorageError> {
        let dir = self
            .open_data_dir()
            .map_err(|error| StorageError::read(self.path_context(), error.to_string()))?;
        let bytes = dir
            .read(COLLECTION_FILE)
            .map_err(|error| StorageError::read(self.path_context(), error.to_string()))?;
        serde_json::from_slice(&bytes)
            .map_err(|error| StorageError::read(self.path_context(), error.to_string()))
    }

    async fn save(&self, contacts: Vec<Contact>) -> Result<(), StorageError> {
        let dir = self
            .open_data_dir()
            .map_err(|error| StorageError::write(self.path_context(), error.to_string()))?;
        let bytes = serde_json::to_vec(&contacts)
            .map_err(|error| StorageError::write(self.path_context(), error.to_string()))?;

        let staged_name = format!(".tmp-contacts-{}", Uuid::new_v4().simple());
        let result = dir
            .write(&staged_name, &bytes)
            .map_err(|error| StorageError::write(self.path_context(), error.to_string()))
            .and_then(|()| self.replace_collection(&dir, Path::new(&staged_name)));

        let _cleanup_result = dir.remove_file(&staged_name);
        result
    }
}

#[cfg(test)]
#[path = "json_file_tests.rs"]
mod tests;
