//! Identity-provider seam for credential and federated sign-in.
//!
//! DESIGN
//! ======
//! Every method is `async` even though the bundled provider answers
//! immediately, so a real backend can be dropped in without touching the
//! session operations that call it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use crate::error::AuthError;
use crate::net::types::Identity;

const MOCK_USER_ID: &str = "1";
const MOCK_AVATAR_URL: &str =
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&fit=crop&crop=face";
const MOCK_GOOGLE_EMAIL: &str = "user@gmail.com";
const MOCK_GOOGLE_NAME: &str = "John Angler";

/// An external authority that turns credentials into an `Identity`.
#[allow(async_fn_in_trait)]
pub trait IdentityProvider {
    /// Authenticate with email and password.
    ///
    /// # Errors
    ///
    /// Returns an `AuthError` if the provider rejects the credentials.
    async fn login(&self, email: &str, password: &str) -> Result<Identity, AuthError>;

    /// Register a new account.
    ///
    /// # Errors
    ///
    /// Returns an `AuthError` if the provider refuses the registration.
    async fn signup(&self, email: &str, password: &str, name: &str) -> Result<Identity, AuthError>;

    /// Run the Google OAuth handshake.
    ///
    /// # Errors
    ///
    /// Returns an `AuthError` if the flow is cancelled or denied.
    async fn login_with_google(&self) -> Result<Identity, AuthError>;
}

/// Local stand-in that accepts every attempt and fabricates a profile.
#[derive(Clone, Copy, Debug, Default)]
pub struct MockIdentityProvider;

/// Display name derived from an email address: its local part.
#[must_use]
pub fn name_from_email(email: &str) -> String {
    email.split('@').next().unwrap_or(email).to_owned()
}

fn mock_identity(email: &str, name: String) -> Identity {
    Identity {
        id: MOCK_USER_ID.to_owned(),
        email: email.to_owned(),
        name,
        avatar: Some(MOCK_AVATAR_URL.to_owned()),
    }
}

impl IdentityProvider for MockIdentityProvider {
    async fn login(&self, email: &str, _password: &str) -> Result<Identity, AuthError> {
        Ok(mock_identity(email, name_from_email(email)))
    }

    async fn signup(&self, email: &str, _password: &str, name: &str) -> Result<Identity, AuthError> {
        Ok(mock_identity(email, name.to_owned()))
    }

    async fn login_with_google(&self) -> Result<Identity, AuthError> {
        Ok(mock_identity(MOCK_GOOGLE_EMAIL, MOCK_GOOGLE_NAME.to_owned()))
    }
}
