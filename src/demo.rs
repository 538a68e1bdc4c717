// Demo mode: an in-process stand-in for the shortening service
//
// Lets the TUI be showcased without a backend. Codes are derived from the
// SHA-256 of the long URL, so the same URL always gets the same short URL.
//
// Run with: SHORTURL_DEMO=1 cargo run --release

use crate::shortener::api::{RequestError, ShortenApi, ShortenRequest, ShortenResponse};
use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::time::Duration;
use tokio::time::sleep;

/// Base of generated short URLs
const DEMO_BASE: &str = "http://sho.rt";

/// Length of generated codes
const CODE_LEN: usize = 7;

const BASE62: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

pub struct DemoShortener {
    latency: Duration,
}

impl DemoShortener {
    pub fn new() -> Self {
        Self {
            // Long enough to see the "Generating..." state
            latency: Duration::from_millis(600),
        }
    }
}

impl Default for DemoShortener {
    fn default() -> Self {
        Self::new()
    }
}

/// Deterministic base62 code for a long URL
fn short_code(url: &str) -> String {
    let digest = Sha256::digest(url.as_bytes());
    digest
        .iter()
        .take(CODE_LEN)
        .map(|byte| BASE62[(*byte as usize) % BASE62.len()] as char)
        .collect()
}

#[async_trait]
impl ShortenApi for DemoShortener {
    async fn shorten(&self, request: &ShortenRequest) -> Result<ShortenResponse, RequestError> {
        sleep(self.latency).await;

        Ok(ShortenResponse {
            message: "URL shortened successfully.".to_string(),
            short_url: format!("{}/{}", DEMO_BASE, short_code(&request.url)),
        })
    }

    fn describe(&self) -> String {
        format!("{} (demo)", DEMO_BASE)
    }
}
