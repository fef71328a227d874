//! File-based persistence adapters.
//!
//! The contact collection lives in one JSON file under the data directory.
//! The adapter implements the domain's [`ContactStorage`] port and keeps the
//! on-disk format an implementation detail:
//!
//! - **Full-document writes**: every save replaces the whole collection, so
//!   the file is always a complete, parseable array.
//! - **Atomic replacement**: saves stage to a temporary name and rename over
//!   the target.
//! - **Strongly typed errors**: I/O and parse failures are mapped to
//!   [`StorageError`](crate::domain::ports::StorageError) with path context.
//!
//! [`ContactStorage`]: crate::domain::ports::ContactStorage

mod json_file;

pub use json_file::{COLLECTION_FILE, JsonFileStorage};
