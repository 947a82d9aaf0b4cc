//! Error taxonomy shared by session, storage, and upload code paths.
//!
//! ERROR HANDLING
//! ==============
//! - `ValidationError` is raised at the call site before any operation runs.
//! - `AuthError` aborts a session operation and leaves the store untouched.
//! - `PersistenceError` is logged and swallowed once the in-memory
//!   transition has happened.
//! - `TransportError` is shown to the user; prior state is kept.
//!
//! Every `Display` message is written to be rendered directly in the UI.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// The identity provider rejected the attempt or the federated flow failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid email or password.")]
    InvalidCredentials,
    #[error("Sign-in was cancelled.")]
    FederatedCancelled,
    #[error("Sign-in was denied: {0}")]
    FederatedDenied(String),
    #[error("Sign-in failed: {0}")]
    Provider(String),
}

impl AuthError {
    /// Map an identity-provider reason code onto the taxonomy.
    #[must_use]
    pub fn from_provider_reason(code: &str) -> Self {
        match code.trim() {
            "invalid_credentials" | "invalid_grant" => Self::InvalidCredentials,
            "cancelled" | "popup_closed_by_user" => Self::FederatedCancelled,
            "access_denied" => Self::FederatedDenied(code.trim().to_owned()),
            other => Self::Provider(other.to_owned()),
        }
    }
}

/// A caller-side precondition failed; nothing was attempted.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Enter your {0}.")]
    MissingField(&'static str),
    #[error("Enter a valid {0}.")]
    InvalidNumber(&'static str),
    #[error("Please accept the terms to continue.")]
    TermsNotAccepted,
    #[error("Please select a valid image file")]
    NotAnImage,
    #[error("Image too large. Please select an image under 10MB")]
    ImageTooLarge,
}

/// Durable storage could not be read or written.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PersistenceError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
    #[error("storage payload could not be encoded: {0}")]
    Encode(String),
    #[error("stored value could not be decoded: {0}")]
    Decode(String),
}

/// The image-analysis request failed before producing a recommendation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("Failed to analyze image. Please check your connection and try again.")]
    Network(String),
    #[error("{0}")]
    Service(String),
    #[error("Analysis service returned an unexpected response.")]
    MalformedResponse,
}
