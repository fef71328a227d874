//! Behavioural tests for the contact store.
//!
//! These pin the store's observable semantics, including the deliberate
//! case-sensitivity mismatch between lookups and duplicate checks.

use std::sync::Arc;

use rstest::{fixture, rstest};

use super::ContactStore;
use crate::domain::Contact;
use crate::domain::ports::{InMemoryContactStorage, MockContactStorage, StorageError};

fn contact(name: &str) -> Contact {
    Contact::new(
        name,
        format!("{}@example.com", name.to_lowercase()),
        "081234567890",
    )
}

fn seeded_store(contacts: Vec<Contact>) -> ContactStore {
    ContactStore::new(Arc::new(InMemoryContactStorage::with_contacts(contacts)))
}

fn stored_names(contacts: Vec<Contact>) -> Vec<String> {
    contacts.into_iter().map(|c| c.name).collect()
}

#[fixture]
fn empty_store() -> ContactStore {
    ContactStore::new(Arc::new(InMemoryContactStorage::default()))
}

#[rstest]
#[tokio::test]
async fn save_then_load_all_round_trips_in_order(empty_store: ContactStore) {
    let contacts = vec![contact("Ana"), contact("Budi"), contact("Citra")];
    empty_store.save(contacts.clone()).await.expect("save");
    assert_eq!(empty_store.load_all().await.expect("load"), contacts);
}

#[rstest]
#[tokio::test]
async fn ensure_exists_is_idempotent(empty_store: ContactStore) {
    empty_store.ensure_exists().await.expect("first create");
    empty_store.ensure_exists().await.expect("second create");
    assert_eq!(empty_store.load_all().await.expect("load"), Vec::new());
}

#[tokio::test]
async fn ensure_exists_preserves_existing_contacts() {
    let store = seeded_store(vec![contact("Ana")]);
    store.ensure_exists().await.expect("idempotent create");
    assert_eq!(store.load_all().await.expect("load"), vec![contact("Ana")]);
}

#[rstest]
#[case("Ana")]
#[case("ANA")]
#[case("ana")]
#[tokio::test]
async fn find_by_name_matches_case_insensitively(#[case] probe: &str) {
    let store = seeded_store(vec![contact("ana")]);
    let found = store
        .find_by_name(probe)
        .await
        .expect("lookup succeeds")
        .expect("contact present");
    assert_eq!(found.name, "ana");
}

#[tokio::test]
async fn find_by_name_returns_the_first_match_in_order() {
    let first = Contact::new("ana", "first@example.com", "081234567890");
    let second = Contact::new("ANA", "second@example.com", "081234567890");
    let store = seeded_store(vec![first.clone(), second]);
    assert_eq!(
        store.find_by_name("Ana").await.expect("lookup"),
        Some(first)
    );
}

#[tokio::test]
async fn case_rules_differ_between_lookup_and_duplicate_check() {
    let store = seeded_store(vec![contact("ana")]);
    assert!(
        store
            .find_by_name("Ana")
            .await
            .expect("lookup")
            .is_some(),
        "lookups match ignoring case"
    );
    assert!(
        !store.exists_by_name("Ana").await.expect("probe"),
        "duplicate checks compare exactly"
    );
    assert!(store.exists_by_name("ana").await.expect("probe"));
}

#[tokio::test]
async fn delete_of_absent_name_is_a_silent_noop() {
    let store = seeded_store(vec![contact("Ana")]);
    store.delete("Zzz").await.expect("no-op delete succeeds");
    assert_eq!(store.load_all().await.expect("load"), vec![contact("Ana")]);
}

#[tokio::test]
async fn delete_rewrites_the_collection_even_when_nothing_matches() {
    let mut storage = MockContactStorage::new();
    storage
        .expect_load()
        .times(1)
        .returning(|| Ok(vec![Contact::new("Ana", "ana@example.com", "081234567890")]));
    storage
        .expect_save()
        .times(1)
        .withf(|contacts| stored_names(contacts.clone()) == ["Ana"])
        .returning(|_| Ok(()));

    let store = ContactStore::new(Arc::new(storage));
    store.delete("Zzz").await.expect("delete succeeds");
}

#[tokio::test]
async fn delete_removes_every_exact_match() {
    let store = seeded_store(vec![contact("Ana"), contact("ana"), contact("Ana")]);
    store.delete("Ana").await.expect("delete");
    assert_eq!(
        stored_names(store.load_all().await.expect("load")),
        ["ana"]
    );
}

#[tokio::test]
async fn update_replaces_and_moves_to_the_end() {
    let store = seeded_store(vec![contact("Ana"), contact("Citra")]);
    store.update("Ana", contact("Budi")).await.expect("update");
    assert_eq!(
        stored_names(store.load_all().await.expect("load")),
        ["Citra", "Budi"]
    );
}

#[tokio::test]
async fn update_of_absent_name_degenerates_to_append() {
    let store = seeded_store(vec![contact("Ana")]);
    store.update("Zzz", contact("Budi")).await.expect("update");
    assert_eq!(
        stored_names(store.load_all().await.expect("load")),
        ["Ana", "Budi"]
    );
}

#[tokio::test]
async fn add_then_exists_by_name_sees_the_contact() {
    let store = seeded_store(Vec::new());
    store.add(contact("Dewi")).await.expect("add");
    assert!(store.exists_by_name("Dewi").await.expect("probe"));
}

#[tokio::test]
async fn add_performs_no_duplicate_check() {
    let store = seeded_store(vec![contact("Ana")]);
    store.add(contact("Ana")).await.expect("add");
    assert_eq!(store.load_all().await.expect("load").len(), 2);
}

#[rstest]
#[tokio::test]
async fn add_on_a_fresh_store_round_trips_exactly_one_contact(empty_store: ContactStore) {
    empty_store.ensure_exists().await.expect("create");
    empty_store.add(contact("Eka")).await.expect("add");
    assert_eq!(
        empty_store.load_all().await.expect("load"),
        vec![contact("Eka")]
    );
}

#[rstest]
#[tokio::test]
async fn load_all_reports_a_missing_collection(empty_store: ContactStore) {
    let err = empty_store
        .load_all()
        .await
        .expect_err("nothing created yet");
    assert!(matches!(err, StorageError::Read { .. }));
}

#[tokio::test]
async fn read_failures_propagate_unmodified() {
    let mut storage = MockContactStorage::new();
    storage
        .expect_load()
        .returning(|| Err(StorageError::read("data/contacts.json", "gone")));

    let store = ContactStore::new(Arc::new(storage));
    let err = store.add(contact("Ana")).await.expect_err("add fails");
    assert_eq!(err, StorageError::read("data/contacts.json", "gone"));
}

#[tokio::test]
async fn write_failures_propagate_unmodified() {
    let mut storage = MockContactStorage::new();
    storage.expect_load().returning(|| Ok(Vec::new()));
    storage
        .expect_save()
        .returning(|_| Err(StorageError::write("data/contacts.json", "disk full")));

    let store = ContactStore::new(Arc::new(storage));
    let err = store.add(contact("Ana")).await.expect_err("add fails");
    assert_eq!(err, StorageError::write("data/contacts.json", "disk full"));
}
