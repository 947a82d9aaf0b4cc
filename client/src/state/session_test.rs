use super::*;
use crate::util::storage::MemoryStorage;

fn identity(id: &str, email: &str, name: &str) -> Identity {
    Identity {
        id: id.to_owned(),
        email: email.to_owned(),
        name: name.to_owned(),
        avatar: None,
    }
}

fn store_over(storage: &MemoryStorage) -> SessionStore {
    SessionStore::new(Arc::new(storage.clone()))
}

/// Storage whose every operation fails.
struct BrokenStorage;

impl KeyValueStore for BrokenStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, PersistenceError> {
        Err(PersistenceError::Read("quota".to_owned()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), PersistenceError> {
        Err(PersistenceError::Write("quota".to_owned()))
    }

    fn remove(&self, _key: &str) -> Result<(), PersistenceError> {
        Err(PersistenceError::Write("quota".to_owned()))
    }
}

// =============================================================
// Session
// =============================================================

#[test]
fn session_default_is_initializing() {
    let session = Session::default();
    assert!(session.is_loading());
    assert!(session.identity().is_none());
}

#[test]
fn new_store_is_initializing() {
    let store = store_over(&MemoryStorage::new());
    assert_eq!(store.session(), &Session::Initializing);
}

// =============================================================
// restore
// =============================================================

#[test]
fn restore_empty_storage_is_anonymous() {
    let mut store = store_over(&MemoryStorage::new());
    assert_eq!(store.restore(), &Session::Anonymous);
}

#[test]
fn restore_returning_user_is_authenticated() {
    let storage = MemoryStorage::new()
        .with_entry(SESSION_STORAGE_KEY, r#"{"id":"1","email":"a@b.com","name":"A"}"#);
    let mut store = store_over(&storage);
    store.restore();
    assert_eq!(store.session(), &Session::Authenticated(identity("1", "a@b.com", "A")));
}

#[test]
fn restore_corrupted_value_is_anonymous() {
    let storage = MemoryStorage::new().with_entry(SESSION_STORAGE_KEY, "{\"id\":\"1\",");
    let mut store = store_over(&storage);
    assert_eq!(store.restore(), &Session::Anonymous);
}

#[test]
fn restore_wrong_shape_is_anonymous() {
    let storage = MemoryStorage::new().with_entry(SESSION_STORAGE_KEY, r#"{"user":"a@b.com"}"#);
    let mut store = store_over(&storage);
    assert_eq!(store.restore(), &Session::Anonymous);
}

#[test]
fn restore_blank_id_is_anonymous() {
    let storage = MemoryStorage::new().with_entry(SESSION_STORAGE_KEY, r#"{"id":" ","email":"a@b.com","name":"A"}"#);
    let mut store = store_over(&storage);
    assert_eq!(store.restore(), &Session::Anonymous);
}

#[test]
fn restore_unreadable_storage_is_anonymous() {
    let mut store = SessionStore::new(Arc::new(BrokenStorage));
    assert_eq!(store.restore(), &Session::Anonymous);
}

#[test]
fn restore_runs_only_once() {
    let storage = MemoryStorage::new();
    let mut store = store_over(&storage);
    store.restore();
    storage
        .set(SESSION_STORAGE_KEY, r#"{"id":"9","email":"late@b.com","name":"Late"}"#)
        .unwrap();
    assert_eq!(store.restore(), &Session::Anonymous);
}

#[test]
fn restore_does_not_clobber_a_newer_identity() {
    let mut store = store_over(&MemoryStorage::new());
    store.set(identity("2", "new@b.com", "New"));
    store.restore();
    assert_eq!(store.identity().map(|i| i.id.as_str()), Some("2"));
}

// =============================================================
// set / clear
// =============================================================

#[test]
fn set_then_restart_restores_identical_identity() {
    let storage = MemoryStorage::new();
    let original = Identity {
        avatar: Some("https://example.com/a.png".to_owned()),
        ..identity("1", "a@b.com", "Angler")
    };
    let mut store = store_over(&storage);
    store.restore();
    store.set(original.clone());

    let mut restarted = store_over(&storage);
    restarted.restore();
    assert_eq!(restarted.session(), &Session::Authenticated(original));
}

#[test]
fn set_replaces_prior_identity() {
    let storage = MemoryStorage::new();
    let mut store = store_over(&storage);
    store.restore();
    store.set(identity("1", "a@b.com", "A"));
    store.set(identity("2", "c@d.com", "C"));

    assert_eq!(store.identity(), Some(&identity("2", "c@d.com", "C")));
    assert_eq!(storage.len(), 1);
    let raw = storage.get(SESSION_STORAGE_KEY).unwrap().unwrap();
    assert_eq!(Identity::from_stored(&raw), Some(identity("2", "c@d.com", "C")));
}

#[test]
fn set_with_failing_storage_still_authenticates() {
    let mut store = SessionStore::new(Arc::new(BrokenStorage));
    store.restore();
    store.set(identity("1", "a@b.com", "A"));
    assert!(store.session().is_authenticated());
}

#[test]
fn clear_erases_durable_copy() {
    let storage = MemoryStorage::new();
    let mut store = store_over(&storage);
    store.restore();
    store.set(identity("1", "a@b.com", "A"));
    store.clear();

    assert_eq!(store.session(), &Session::Anonymous);
    assert_eq!(storage.get(SESSION_STORAGE_KEY).unwrap(), None);
}

#[test]
fn clear_with_failing_storage_still_anonymous() {
    let mut store = SessionStore::new(Arc::new(BrokenStorage));
    store.set(identity("1", "a@b.com", "A"));
    store.clear();
    assert_eq!(store.session(), &Session::Anonymous);
}

#[test]
fn clones_over_same_storage_compare_equal() {
    let store = store_over(&MemoryStorage::new());
    assert_eq!(store.clone(), store);
}
