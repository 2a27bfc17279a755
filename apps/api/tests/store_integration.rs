//! Integration tests for the file-backed store
//!
//! These tests verify that state written through the persistence adapter
//! survives a restart, and that an unusable file degrades to memory.

use seo_prompter_api::domain::repositories::{storage_keys, KeyValueStore};
use seo_prompter_api::infrastructure::persistence::PersistenceAdapter;
use seo_prompter_api::infrastructure::repositories::FileStore;
use serde_json::json;
use std::collections::HashMap;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> FileStore {
    FileStore::new(dir.path().join("store.json"))
}

#[test]
fn test_missing_file_reads_as_empty() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    assert_eq!(store.get(storage_keys::SETTINGS).unwrap(), None);
    assert!(!store.path().exists());
}

#[test]
fn test_keys_are_stored_side_by_side() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.set(storage_keys::LOCALE, json!("en")).unwrap();
    store
        .set(storage_keys::RESPONSES, json!({ "1": "Hello" }))
        .unwrap();

    let reopened = store_in(&dir);
    assert_eq!(
        reopened.get(storage_keys::LOCALE).unwrap(),
        Some(json!("en")),
    );
    assert_eq!(
        reopened.get(storage_keys::RESPONSES).unwrap(),
        Some(json!({ "1": "Hello" }))
    );
}

#[test]
fn test_overwrite_replaces_value() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.set(storage_keys::LOCALE, json!("en")).unwrap();
    store.set(storage_keys::LOCALE, json!("sk")).unwrap();

    assert_eq!(store.get(storage_keys::LOCALE).unwrap(), Some(json!("sk")));
}

#[test]
fn test_responses_survive_restart() {
    let dir = TempDir::new().unwrap();

    let adapter = PersistenceAdapter::new(Arc::new(store_in(&dir)));
    adapter.set(
        storage_keys::RESPONSES,
        &HashMap::from([(2u32, "Saved answer".to_string())]),
    );

    let restarted = PersistenceAdapter::new(Arc::new(store_in(&dir)));
    let responses: HashMap<u32, String> = restarted.get(storage_keys::RESPONSES).unwrap();
    assert_eq!(responses.get(&2).map(String::as_str), Some("Saved answer"));
}

#[test]
fn test_corrupt_file_degrades_to_memory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    fs::write(&path, "{ not json").unwrap();

    let store = FileStore::new(&path);
    assert!(store.get(storage_keys::LOCALE).is_err());

    let adapter = PersistenceAdapter::new(Arc::new(FileStore::new(&path)));
    assert_eq!(adapter.get::<String>(storage_keys::LOCALE), None);
    assert!(adapter.is_degraded());

    adapter.set(storage_keys::LOCALE, &"en");
    assert_eq!(
        adapter.get::<String>(storage_keys::LOCALE).as_deref(),
        Some("en"),
    );
    assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
}

#[test]
fn test_store_file_is_written_compact() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store
        .set(
            storage_keys::RESPONSES,
            json!({ "1": "line one\nline two" }),
        )
        .unwrap();

    let contents = fs::read_to_string(store.path()).unwrap();
    assert!(!contents.contains('\n'));
    assert!(!contents.contains(": "));
    assert!(!dir.path().join("store.json.tmp").exists());
}
