//! Session operations: restore, login, signup, Google login, logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call these with the app's identity provider and the shared
//! `RwSignal<SessionStore>`. The route guard reacts to the resulting session
//! change; no operation navigates on its own.
//!
//! ERROR HANDLING
//! ==============
//! The provider is awaited first and the store is only touched on success,
//! so an `AuthError` leaves the session exactly as it was. Signup input is
//! validated into a `SignupRequest` before the operation can be called.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::error::{AuthError, ValidationError};
use crate::net::identity::IdentityProvider;
use crate::net::types::Identity;
use crate::state::session::{Session, SessionStore};

/// Write access to the session store used by the operations below.
pub trait SessionHandle {
    /// Leave `Initializing` from durable storage and report the result.
    fn restore(&self) -> Session;
    /// Atomically replace the current identity.
    fn commit(&self, identity: Identity);
    /// Return to anonymous and erase the persisted copy.
    fn clear(&self);
}

impl SessionHandle for RwSignal<SessionStore> {
    fn restore(&self) -> Session {
        self.try_update(|store| store.restore().clone()).unwrap_or_default()
    }

    fn commit(&self, identity: Identity) {
        self.update(|store| store.set(identity));
    }

    fn clear(&self) {
        self.update(SessionStore::clear);
    }
}

/// Signup input that has passed call-site validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupRequest {
    email: String,
    password: String,
    name: String,
}

impl SignupRequest {
    /// Validate raw form input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingField` for a blank name, email, or
    /// password and `ValidationError::PasswordMismatch` when the
    /// confirmation differs.
    pub fn new(email: &str, password: &str, confirmation: &str, name: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        let email = email.trim();
        if email.is_empty() {
            return Err(ValidationError::MissingField("email"));
        }
        if password.is_empty() {
            return Err(ValidationError::MissingField("password"));
        }
        if password != confirmation {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(Self {
            email: email.to_owned(),
            password: password.to_owned(),
            name: name.to_owned(),
        })
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Load the persisted session. Runs once at startup, before the guard can
/// leave `Booting`.
#[allow(clippy::unused_async)]
pub async fn restore<H>(session: &H) -> Session
where
    H: SessionHandle + ?Sized,
{
    session.restore()
}

/// Sign in with email and password.
///
/// # Errors
///
/// Returns the provider's `AuthError`; the session is left unchanged.
pub async fn login<P, H>(provider: &P, session: &H, email: &str, password: &str) -> Result<Identity, AuthError>
where
    P: IdentityProvider,
    H: SessionHandle + ?Sized,
{
    let identity = provider
        .login(email, password)
        .await
        .inspect_err(|e| log::warn!("login rejected: {e}"))?;
    session.commit(identity.clone());
    Ok(identity)
}

/// Create an account and sign in with it.
///
/// # Errors
///
/// Returns the provider's `AuthError`; the session is left unchanged.
pub async fn signup<P, H>(provider: &P, session: &H, request: SignupRequest) -> Result<Identity, AuthError>
where
    P: IdentityProvider,
    H: SessionHandle + ?Sized,
{
    let identity = provider
        .signup(&request.email, &request.password, &request.name)
        .await
        .inspect_err(|e| log::warn!("signup rejected: {e}"))?;
    session.commit(identity.clone());
    Ok(identity)
}

/// Sign in through Google OAuth.
///
/// # Errors
///
/// Returns `AuthError` if the federated flow is cancelled or denied.
pub async fn login_with_google<P, H>(provider: &P, session: &H) -> Result<Identity, AuthError>
where
    P: IdentityProvider,
    H: SessionHandle + ?Sized,
{
    let identity = provider
        .login_with_google()
        .await
        .inspect_err(|e| log::warn!("google sign-in failed: {e}"))?;
    session.commit(identity.clone());
    Ok(identity)
}

/// Sign out. Always succeeds, including when already anonymous.
#[allow(clippy::unused_async)]
pub async fn logout<H>(session: &H)
where
    H: SessionHandle + ?Sized,
{
    session.clear();
    log::info!("signed out");
}
