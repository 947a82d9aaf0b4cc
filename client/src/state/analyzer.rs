//! Spot analyzer page state: selected photo, request status, result.
//!
//! DESIGN
//! ======
//! The `web_sys::File` itself stays with the page; this model only tracks
//! what the UI shows, so transitions are testable without a browser.

#[cfg(test)]
#[path = "analyzer_test.rs"]
mod analyzer_test;

use crate::error::{TransportError, ValidationError};
use crate::net::api::validate_image_upload;

/// Metadata for the photo chosen for analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedImage {
    pub name: String,
    pub content_type: String,
    pub size: u64,
    /// Object URL used for the preview, if one was created.
    pub preview_url: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnalyzerState {
    pub selected: Option<SelectedImage>,
    pub analysis: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl AnalyzerState {
    /// Validate and select a photo. A rejected photo keeps the previous
    /// selection and records the validation message.
    ///
    /// # Errors
    ///
    /// Returns the `ValidationError` from `validate_image_upload`.
    pub fn select(&mut self, image: SelectedImage) -> Result<(), ValidationError> {
        if let Err(e) = validate_image_upload(&image.content_type, image.size) {
            self.error = Some(e.to_string());
            return Err(e);
        }
        self.error = None;
        self.analysis = None;
        self.selected = Some(image);
        Ok(())
    }

    /// Mark a request as started. Returns `false` if there is nothing to
    /// analyze or a request is already running.
    pub fn begin(&mut self) -> bool {
        if self.selected.is_none() || self.loading {
            return false;
        }
        self.loading = true;
        self.error = None;
        true
    }

    /// Record the outcome of a request started with `begin`. A failure keeps
    /// any earlier recommendation; only `select` and `reset` drop it.
    pub fn finish(&mut self, outcome: Result<String, TransportError>) {
        self.loading = false;
        match outcome {
            Ok(recommendation) => {
                self.analysis = Some(recommendation);
                self.error = None;
            }
            Err(e) => {
                log::warn!("spot analysis failed: {e}");
                self.error = Some(e.to_string());
            }
        }
    }

    /// Forget the selection and any result.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The preview URL to revoke when the selection is dropped.
    #[must_use]
    pub fn preview_url(&self) -> Option<&str> {
        self.selected.as_ref().and_then(|s| s.preview_url.as_deref())
    }
}
