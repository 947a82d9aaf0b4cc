//! Shared DTOs for identity persistence and the analysis endpoint.
//!
//! DESIGN
//! ======
//! `Identity` is both the in-memory session payload and the JSON record kept
//! in local storage, so its serde shape is the storage format.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::error::TransportError;

/// The authenticated user record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Opaque unique identifier.
    pub id: String,
    pub email: String,
    /// Display name.
    pub name: String,
    /// Optional avatar image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Identity {
    /// Parse a stored identity record, rejecting anything that is not a
    /// well-formed identity object.
    #[must_use]
    pub fn from_stored(raw: &str) -> Option<Self> {
        serde_json::from_str::<Self>(raw).ok().filter(Self::has_id)
    }

    /// A usable identity carries a non-blank id.
    #[must_use]
    pub fn has_id(&self) -> bool {
        !self.id.trim().is_empty()
    }

    /// First word of the display name, used for greetings.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

/// Response body of `POST /api/analyze`.
///
/// Failures arrive either as `{ success: false, error }` or, for rejected
/// uploads, as `{ detail }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl AnalysisResponse {
    /// A failure body carrying `message`, as the host sends it.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self { error: Some(message.into()), ..Self::default() }
    }

    /// Collapse the response into a recommendation or a displayable error.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::Service` when the service reports failure and
    /// `TransportError::MalformedResponse` when success carries no text.
    pub fn into_result(self) -> Result<String, TransportError> {
        if self.success {
            return self.recommendation.ok_or(TransportError::MalformedResponse);
        }
        let message = self
            .error
            .or(self.detail)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| "Analysis failed".to_owned());
        Err(TransportError::Service(message))
    }
}
