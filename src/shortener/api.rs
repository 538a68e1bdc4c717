//! Shortening service contract
//!
//! `POST /v1/shorten` with `{"url": ...}`; a `201 Created` carrying a
//! non-empty `short_url` is the only success.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body of a shorten request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortenRequest {
    /// Normalized long URL
    pub url: String,
}

/// Body of a successful shorten response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShortenResponse {
    #[serde(default)]
    pub message: String,
    pub short_url: String,
}

impl ShortenResponse {
    /// Extract the short URL, rejecting an empty one
    pub fn into_short_url(self) -> Result<String, RequestError> {
        if self.short_url.trim().is_empty() {
            return Err(RequestError::EmptyShortUrl);
        }
        Ok(self.short_url)
    }
}

/// Failures of a single shorten request
///
/// These are logged for diagnostics only; the user always sees the generic
/// retry message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// Connection, timeout or body read failure
    #[error("transport error: {0}")]
    Transport(String),
    /// Any status other than 201
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },
    /// 201 with a body that is not the expected JSON
    #[error("malformed response body: {0}")]
    Body(String),
    /// 201 with an empty `short_url`
    #[error("response did not contain a short URL")]
    EmptyShortUrl,
}

/// The remote shortening endpoint
#[async_trait]
pub trait ShortenApi: Send + Sync {
    async fn shorten(&self, request: &ShortenRequest) -> Result<ShortenResponse, RequestError>;

    /// Human-readable endpoint description for the banner and status bar
    fn describe(&self) -> String;
}
