use super::*;

#[test]
fn memory_storage_roundtrips_values() {
    let store = MemoryStorage::new();
    store.set("k", "v").unwrap();
    assert_eq!(store.get("k").unwrap(), Some("v".to_owned()));
}

#[test]
fn memory_storage_remove_absent_key_succeeds() {
    let store = MemoryStorage::new();
    assert!(store.remove("missing").is_ok());
    assert!(store.is_empty());
}

#[test]
fn memory_storage_clones_share_entries() {
    let store = MemoryStorage::new();
    let observer = store.clone();
    store.set("k", "v").unwrap();
    assert_eq!(observer.get("k").unwrap(), Some("v".to_owned()));
    observer.remove("k").unwrap();
    assert_eq!(store.get("k").unwrap(), None);
}

#[test]
fn with_entry_prepopulates() {
    let store = MemoryStorage::new().with_entry("k", "v");
    assert_eq!(store.len(), 1);
}

#[test]
fn load_json_returns_none_for_absent_key() {
    let store = MemoryStorage::new();
    let value: Option<Vec<u32>> = load_json(&store, "nums").unwrap();
    assert_eq!(value, None);
}

#[test]
fn load_json_reports_undecodable_value() {
    let store = MemoryStorage::new().with_entry("nums", "{not json");
    let result: Result<Option<Vec<u32>>, _> = load_json(&store, "nums");
    assert!(matches!(result, Err(PersistenceError::Decode(_))));
}

#[test]
fn load_json_reports_wrong_shape() {
    let store = MemoryStorage::new().with_entry("nums", r#"{"a":1}"#);
    let result: Result<Option<Vec<u32>>, _> = load_json(&store, "nums");
    assert!(matches!(result, Err(PersistenceError::Decode(_))));
}

#[test]
fn save_then_load_json() {
    let store = MemoryStorage::new();
    save_json(&store, "nums", &vec![1_u32, 2, 3]).unwrap();
    let value: Option<Vec<u32>> = load_json(&store, "nums").unwrap();
    assert_eq!(value, Some(vec![1, 2, 3]));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_unavailable_outside_browser() {
    let store = BrowserStorage;
    assert_eq!(store.get("k"), Err(PersistenceError::Unavailable));
    assert_eq!(store.set("k", "v"), Err(PersistenceError::Unavailable));
    assert_eq!(store.remove("k"), Err(PersistenceError::Unavailable));
}
