//! Process-wide session store: who is logged in, and the durable copy.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns one `SessionStore` inside an `RwSignal` and hands it to the
//! route guard and the session operations in `state::auth`. Nothing else
//! mutates it.
//!
//! LIFECYCLE
//! =========
//! `Initializing` is left exactly once, by `restore()`. From then on the
//! store alternates between `Anonymous` and `Authenticated`, and durable
//! storage mirrors it on a best-effort basis: a failed write is logged and
//! the in-memory transition stands.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::sync::Arc;

use crate::net::types::Identity;
use crate::error::PersistenceError;
use crate::util::storage::{KeyValueStore, load_json, save_json};

/// Local storage key holding the serialized identity.
pub const SESSION_STORAGE_KEY: &str = "fishcast_user";

/// Current authentication state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    /// Durable storage has not been read yet.
    #[default]
    Initializing,
    Anonymous,
    Authenticated(Identity),
}

impl Session {
    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Authenticated(identity) => Some(identity),
            Self::Initializing | Self::Anonymous => None,
        }
    }

    /// True until the stored session has been restored.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Initializing)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// Owner of the current `Session` and its persisted copy.
#[derive(Clone)]
pub struct SessionStore {
    session: Session,
    storage: Arc<dyn KeyValueStore>,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore").field("session", &self.session).finish_non_exhaustive()
    }
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        self.session == other.session && Arc::ptr_eq(&self.storage, &other.storage)
    }
}

impl SessionStore {
    /// A store in `Initializing` over `storage`.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { session: Session::Initializing, storage }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        self.session.identity()
    }

    /// Read the persisted identity and leave `Initializing`.
    ///
    /// Absent, unreadable, or malformed records all restore to `Anonymous`.
    /// Calls after the first transition are ignored. The async entry point
    /// is `state::auth::restore`.
    pub fn restore(&mut self) -> &Session {
        if !self.session.is_loading() {
            log::warn!("session restore skipped: store already initialized");
            return &self.session;
        }

        self.session = match load_json::<Identity>(self.storage.as_ref(), SESSION_STORAGE_KEY) {
            Ok(Some(identity)) if identity.has_id() => {
                log::info!("session restored for user {}", identity.id);
                Session::Authenticated(identity)
            }
            Ok(Some(_)) => {
                log::warn!("stored session has no user id; starting anonymous");
                Session::Anonymous
            }
            Ok(None) => Session::Anonymous,
            Err(PersistenceError::Decode(e)) => {
                log::warn!("stored session is malformed ({e}); starting anonymous");
                Session::Anonymous
            }
            Err(e) => {
                log::warn!("session restore failed: {e}; starting anonymous");
                Session::Anonymous
            }
        };
        &self.session
    }

    /// Replace the current identity and persist it.
    pub fn set(&mut self, identity: Identity) {
        if let Err(e) = save_json(self.storage.as_ref(), SESSION_STORAGE_KEY, &identity) {
            log::warn!("session not persisted: {e}");
        }
        self.session = Session::Authenticated(identity);
    }

    /// Drop the current identity and erase the persisted copy.
    pub fn clear(&mut self) {
        self.session = Session::Anonymous;
        if let Err(e) = self.storage.remove(SESSION_STORAGE_KEY) {
            log::warn!("persisted session not removed: {e}");
        }
    }
}
