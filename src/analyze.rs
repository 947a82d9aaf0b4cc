//! Forwarding client for the external image-analysis service.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser posts spot photos to `/api/analyze` on this host. The body is
//! passed through untouched (multipart and all) to `FISHCAST_ANALYZE_URL`,
//! and the upstream status, content type, and body come back as-is.
//!
//! ERROR HANDLING
//! ==============
//! A missing upstream or a failed request becomes an `AnalyzeError`; the
//! route turns it into a JSON failure body the client already knows how to
//! read.

#[cfg(test)]
#[path = "analyze_test.rs"]
mod analyze_test;

use std::time::Duration;

use axum::body::Bytes;
use axum::http::{HeaderValue, StatusCode};

use crate::config::ConfigError;

const REQUEST_TIMEOUT_SECS: u64 = 60;
const CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    #[error("Analysis service is not configured")]
    NotConfigured,
    #[error("Analysis service is unavailable")]
    Upstream(#[source] reqwest::Error),
}

impl AnalyzeError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            Self::Upstream(e) if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

/// What the upstream answered.
#[derive(Debug)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub content_type: Option<HeaderValue>,
    pub body: Bytes,
}

#[derive(Clone, Debug)]
pub struct AnalyzeProxy {
    http: reqwest::Client,
    upstream: Option<String>,
}

impl AnalyzeProxy {
    /// # Errors
    ///
    /// Returns `ConfigError::HttpClient` if the TLS backend cannot be set up.
    pub fn new(upstream: Option<String>) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;
        Ok(Self { http, upstream })
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.upstream.is_some()
    }

    /// Send `body` to the upstream with the caller's content type.
    ///
    /// # Errors
    ///
    /// `NotConfigured` without an upstream URL, `Upstream` if the request or
    /// reading the reply fails.
    pub async fn forward(&self, content_type: Option<&HeaderValue>, body: Bytes) -> Result<UpstreamReply, AnalyzeError> {
        let url = self.upstream.as_deref().ok_or(AnalyzeError::NotConfigured)?;

        let mut request = self.http.post(url).body(body);
        if let Some(content_type) = content_type {
            request = request.header(reqwest::header::CONTENT_TYPE, content_type.clone());
        }

        let response = request.send().await.map_err(AnalyzeError::Upstream)?;
        let status = response.status();
        let content_type = response.headers().get(reqwest::header::CONTENT_TYPE).cloned();
        let body = response.bytes().await.map_err(AnalyzeError::Upstream)?;

        Ok(UpstreamReply { status, content_type, body })
    }
}
