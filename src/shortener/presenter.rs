//! Result presenter: copy-to-clipboard acknowledgement for one short URL
//!
//! A presenter exists only while a short URL is displayed. A successful
//! `copy()` flips the clipboard state to `Copied` and arms a revert timer;
//! copying again aborts that timer and arms a fresh one. The timer task is
//! owned by the presenter and aborted when the presenter is dropped. A
//! revert that was already queued carries a token naming its presenter and
//! generation, and anything but the live pair is ignored.

use crate::clipboard::{ClipboardError, ClipboardWriter};
use crate::events::{AppEvent, EventSender};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// How long "Copied!" stays up after the latest copy
pub const COPY_FEEDBACK: Duration = Duration::from_millis(2000);

static NEXT_PRESENTER_ID: AtomicU64 = AtomicU64::new(1);

/// Clipboard acknowledgement state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClipboardState {
    #[default]
    Idle,
    Copied { expires_at: Instant },
}

/// Identifies one armed revert timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevertToken {
    presenter: u64,
    generation: u64,
}

/// Signals a presenter hands back to the orchestrator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultAction {
    /// Clear the current short URL and go back to submission
    GenerateNew,
}

/// Armed revert timer; aborting on drop is what makes teardown safe
struct RevertTimer {
    token: RevertToken,
    handle: JoinHandle<()>,
}

impl Drop for RevertTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub struct ResultPresenter {
    id: u64,
    short_url: String,
    clipboard: Arc<dyn ClipboardWriter>,
    events: EventSender,
    state: ClipboardState,
    timer: Option<RevertTimer>,
    generation: u64,
}

impl ResultPresenter {
    pub fn new(
        short_url: impl Into<String>,
        clipboard: Arc<dyn ClipboardWriter>,
        events: EventSender,
    ) -> Self {
        Self {
            id: NEXT_PRESENTER_ID.fetch_add(1, Ordering::Relaxed),
            short_url: short_url.into(),
            clipboard,
            events,
            state: ClipboardState::Idle,
            timer: None,
            generation: 0,
        }
    }

    pub fn short_url(&self) -> &str {
        &self.short_url
    }

    pub fn clipboard_state(&self) -> ClipboardState {
        self.state
    }

    pub fn is_copied(&self) -> bool {
        matches!(self.state, ClipboardState::Copied { .. })
    }

    /// Copy the short URL. On failure the state is left untouched.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn copy(&mut self) -> Result<(), ClipboardError> {
        if let Err(err) = self.clipboard.write_text(&self.short_url) {
            tracing::error!("Failed to copy {}: {}", self.short_url, err);
            return Err(err);
        }
        tracing::debug!("Copied {} to clipboard", self.short_url);
        self.arm_revert();
        Ok(())
    }

    /// The short URL as a navigable link target
    pub fn visit(&self) -> &str {
        &self.short_url
    }

    /// Ask the orchestrator to clear this result
    pub fn reset(&self) -> ResultAction {
        ResultAction::GenerateNew
    }

    /// Apply a fired revert timer. Returns false for tokens that are not live.
    pub fn on_revert(&mut self, token: RevertToken) -> bool {
        match &self.timer {
            Some(timer) if timer.token == token => {
                self.timer = None;
                self.state = ClipboardState::Idle;
                true
            }
            _ => {
                tracing::trace!("Ignoring superseded revert {:?}", token);
                false
            }
        }
    }

    fn arm_revert(&mut self) {
        // Dropping the old timer aborts it
        self.timer = None;
        self.generation += 1;

        let token = RevertToken {
            presenter: self.id,
            generation: self.generation,
        };
        let expires_at = Instant::now() + COPY_FEEDBACK;
        let events = self.events.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep_until(expires_at).await;
            let _ = events.send(AppEvent::CopyReverted(token));
        });

        self.state = ClipboardState::Copied { expires_at };
        self.timer = Some(RevertTimer { token, handle });
    }
}
