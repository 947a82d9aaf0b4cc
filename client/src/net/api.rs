//! HTTP calls to the spot-analysis service.
//!
//! Client-side (hydrate): multipart upload via `gloo-net`.
//! Server-side (SSR): the upload is browser-only and not compiled.
//!
//! ERROR HANDLING
//! ==============
//! Uploads are validated before any request is built. Network and service
//! failures come back as `TransportError` values with messages meant for
//! display; callers keep their prior state on error.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::error::ValidationError;

/// Analysis endpoint accepting a multipart `file` field.
pub const ANALYZE_ENDPOINT: &str = "/api/analyze";

/// Largest accepted upload, in bytes.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Check a candidate upload before it is sent.
///
/// # Errors
///
/// Returns `ValidationError::NotAnImage` unless the declared content type is
/// `image/*`, and `ValidationError::ImageTooLarge` above `MAX_UPLOAD_BYTES`.
pub fn validate_image_upload(content_type: &str, size: u64) -> Result<(), ValidationError> {
    let is_image = content_type
        .get(..6)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("image/"));
    if !is_image {
        return Err(ValidationError::NotAnImage);
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(ValidationError::ImageTooLarge);
    }
    Ok(())
}

#[cfg(any(test, feature = "hydrate"))]
fn analyze_failed_message(status: u16) -> String {
    format!("analysis request failed: {status}")
}

/// Upload `file` to the analysis service and return its recommendation.
///
/// # Errors
///
/// Returns `TransportError::Network` when the request cannot be completed,
/// `TransportError::Service` when the service reports a failure, and
/// `TransportError::MalformedResponse` when the body is not understood.
#[cfg(feature = "hydrate")]
pub async fn analyze_spot(file: &web_sys::File) -> Result<String, crate::error::TransportError> {
    use crate::error::TransportError;
    use crate::net::types::AnalysisResponse;

    let form = web_sys::FormData::new().map_err(|e| TransportError::Network(format!("{e:?}")))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| TransportError::Network(format!("{e:?}")))?;

    let resp = gloo_net::http::Request::post(ANALYZE_ENDPOINT)
        .body(form)
        .map_err(|e| TransportError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| TransportError::Network(e.to_string()))?;

    let status = resp.status();
    match resp.json::<AnalysisResponse>().await {
        Ok(body) => body.into_result(),
        Err(_) if !resp.ok() => Err(TransportError::Service(analyze_failed_message(status))),
        Err(_) => Err(TransportError::MalformedResponse),
    }
}
