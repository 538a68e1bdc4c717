//! Test doubles for the shortening endpoint and the clipboard

use super::api::{RequestError, ShortenApi, ShortenRequest, ShortenResponse};
use crate::clipboard::{ClipboardError, ClipboardWriter};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Endpoint fake that records requests and replays a fixed reply
pub struct FakeApi {
    reply: Result<ShortenResponse, RequestError>,
    requests: Mutex<Vec<ShortenRequest>>,
    calls: AtomicUsize,
    /// When set, every call waits for a permit before replying
    gate: Option<Arc<Notify>>,
}

impl FakeApi {
    pub fn replying(message: &str, short_url: &str) -> Self {
        Self::with_reply(Ok(ShortenResponse {
            message: message.to_string(),
            short_url: short_url.to_string(),
        }))
    }

    pub fn failing(error: RequestError) -> Self {
        Self::with_reply(Err(error))
    }

    fn with_reply(reply: Result<ShortenResponse, RequestError>) -> Self {
        Self {
            reply,
            requests: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
            gate: None,
        }
    }

    /// Hold every reply until the returned `Notify` is signalled
    pub fn gated(mut self) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.gate = Some(gate.clone());
        (self, gate)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<ShortenRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ShortenApi for FakeApi {
    async fn shorten(&self, request: &ShortenRequest) -> Result<ShortenResponse, RequestError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.reply.clone()
    }

    fn describe(&self) -> String {
        "fake".to_string()
    }
}

/// Clipboard fake that records writes or fails every time
#[derive(Default)]
pub struct FakeClipboard {
    fail_with: Option<ClipboardError>,
    writes: Mutex<Vec<String>>,
}

impl FakeClipboard {
    pub fn working() -> Self {
        Self::default()
    }

    pub fn broken() -> Self {
        Self {
            fail_with: Some(ClipboardError::Unavailable("no display".to_string())),
            writes: Mutex::new(Vec::new()),
        }
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}

impl ClipboardWriter for FakeClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
