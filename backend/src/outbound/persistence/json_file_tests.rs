//! Filesystem behaviour of the JSON collection adapter.

use std::fs;

use tempfile::TempDir;

use super::{COLLECTION_FILE, JsonFileStorage};
use crate::domain::Contact;
use crate::domain::ports::{ContactStorage, StorageError};

fn storage_in(tmp: &TempDir) -> JsonFileStorage {
    JsonFileStorage::new(tmp.path().join("data"))
}

fn ana() -> Contact {
    Contact::new("Ana", "ana@example.com", "081234567890")
}

fn budi() -> Contact {
    Contact::new("Budi", "budi@example.com", "085512345678")
}

#[tokio::test]
async fn ensure_exists_provisions_an_empty_collection() {
    let tmp = TempDir::new().expect("tempdir");
    let storage = storage_in(&tmp);

    storage.ensure_exists().await.expect("provision");

    assert_eq!(storage.load().await.expect("load"), Vec::new());
    let on_disk = fs::read_to_string(storage.collection_path()).expect("collection file exists");
    assert_eq!(on_disk, "[]");
}

#[tokio::test]
async fn ensure_exists_is_idempotent_and_never_truncates() {
    let tmp = TempDir::new().expect("tempdir");
    let storage = storage_in(&tmp);

    storage.ensure_exists().await.expect("first provision");
    storage.save(vec![ana()]).await.expect("save");
    storage.ensure_exists().await.expect("second provision");

    assert_eq!(storage.load().await.expect("load"), vec![ana()]);
}

#[tokio::test]
async fn load_without_a_backing_file_is_a_read_error() {
    let tmp = TempDir::new().expect("tempdir");
    let storage = storage_in(&tmp);

    let err = storage.load().await.expect_err("nothing provisioned");
    assert!(matches!(err, StorageError::Read { .. }));
}

#[tokio::test]
async fn malformed_content_is_a_read_error() {
    let tmp = TempDir::new().expect("tempdir");
    let storage = storage_in(&tmp);
    storage.ensure_exists().await.expect("provision");
    fs::write(storage.collection_path(), "definitely not json").expect("corrupt the file");

    let err = storage.load().await.expect_err("corrupt collection");
    assert!(matches!(err, StorageError::Read { .. }));
}

#[tokio::test]
async fn an_empty_file_is_a_read_error() {
    let tmp = TempDir::new().expect("tempdir");
    let storage = storage_in(&tmp);
    storage.ensure_exists().await.expect("provision");
    fs::write(storage.collection_path(), "").expect("truncate the file");

    let err = storage.load().await.expect_err("empty file is not a collection");
    assert!(matches!(err, StorageError::Read { .. }));
}

#[tokio::test]
async fn save_then_load_round_trips_in_order() {
    let tmp = TempDir::new().expect("tempdir");
    let storage = storage_in(&tmp);
    storage.ensure_exists().await.expect("provision");

    let contacts = vec![ana(), budi()];
    storage.save(contacts.clone()).await.expect("save");

    assert_eq!(storage.load().await.expect("load"), contacts);
}

#[tokio::test]
async fn save_replaces_the_previous_collection() {
    let tmp = TempDir::new().expect("tempdir");
    let storage = storage_in(&tmp);
    storage.ensure_exists().await.expect("provision");

    storage.save(vec![ana(), budi()]).await.expect("first save");
    storage.save(vec![budi()]).await.expect("second save");

    assert_eq!(storage.load().await.expect("load"), vec![budi()]);
}

#[tokio::test]
async fn legacy_field_names_load_and_rewrite_canonically() {
    let tmp = TempDir::new().expect("tempdir");
    let storage = storage_in(&tmp);
    let data_dir = tmp.path().join("data");
    fs::create_dir_all(&data_dir).expect("create data dir");
    fs::write(
        data_dir.join(COLLECTION_FILE),
        r#"[{"nama": "Ana", "email": "ana@example.com", "nohp": "081234567890"}]"#,
    )
    .expect("write legacy collection");

    let loaded = storage.load().await.expect("legacy collection parses");
    assert_eq!(loaded, vec![ana()]);

    storage.save(loaded).await.expect("rewrite");
    let rewritten = fs::read_to_string(storage.collection_path()).expect("read back");
    assert!(rewritten.contains("\"name\""));
    assert!(!rewritten.contains("nama"));
    assert!(!rewritten.contains("nohp"));
}

#[tokio::test]
async fn save_leaves_no_staging_files_behind() {
    let tmp = TempDir::new().expect("tempdir");
    let storage = storage_in(&tmp);
    storage.ensure_exists().await.expect("provision");

    storage.save(vec![ana()]).await.expect("save");

    let entries: Vec<String> = fs::read_dir(tmp.path().join("data"))
        .expect("read data dir")
        .map(|entry| {
            entry
                .expect("dir entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    assert_eq!(entries, [COLLECTION_FILE]);
}
