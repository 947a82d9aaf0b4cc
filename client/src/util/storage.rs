//! Durable key-value storage behind a narrow trait.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store persists exactly one serialized identity through this
//! trait. `BrowserStorage` is the hydrate-time backend over
//! `window.localStorage`; `MemoryStorage` backs tests.
//!
//! TRADE-OFFS
//! ==========
//! `BrowserStorage` re-resolves `localStorage` on every call instead of
//! caching the `web_sys::Storage` handle, which keeps it `Send + Sync` and
//! usable inside reactive signals.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::PersistenceError;

/// A string key-value store that survives process restarts.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns a `PersistenceError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a `PersistenceError` if the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError>;

    /// Remove `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns a `PersistenceError` if the backend rejects the removal.
    fn remove(&self, key: &str) -> Result<(), PersistenceError>;
}

/// Load a JSON value from `store`. An absent key yields `None`.
///
/// # Errors
///
/// Returns `PersistenceError::Decode` if the stored text is not a `T`, or
/// the backend's error if the read itself fails.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>, PersistenceError> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| PersistenceError::Decode(e.to_string()))
}

/// Save a JSON value to `store`.
///
/// # Errors
///
/// Returns a `PersistenceError` if encoding or the backend write fails.
pub fn save_json<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<(), PersistenceError> {
    let raw = serde_json::to_string(value).map_err(|e| PersistenceError::Encode(e.to_string()))?;
    store.set(key, &raw)
}

/// `window.localStorage`. Reports `Unavailable` outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, PersistenceError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(PersistenceError::Unavailable)
}

#[cfg(feature = "hydrate")]
fn js_error_message(err: wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| PersistenceError::Read(js_error_message(e)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(PersistenceError::Unavailable)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| PersistenceError::Write(js_error_message(e)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(PersistenceError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), PersistenceError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|e| PersistenceError::Write(js_error_message(e)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(PersistenceError::Unavailable)
        }
    }
}

/// In-process store. Clones share the same underlying map, so a clone kept
/// aside observes what a session store wrote.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate `key`, as if written by an earlier process.
    #[must_use]
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_owned(), value.to_owned());
        }
        self
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().map_or(0, |entries| entries.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let entries = self.entries.lock().map_err(|e| PersistenceError::Read(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let mut entries = self.entries.lock().map_err(|e| PersistenceError::Write(e.to_string()))?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), PersistenceError> {
        let mut entries = self.entries.lock().map_err(|e| PersistenceError::Write(e.to_string()))?;
        entries.remove(key);
        Ok(())
    }
}
