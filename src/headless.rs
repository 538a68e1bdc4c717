// Headless mode - one submission without the TUI
//
// Drives the same orchestrator the TUI uses: submit, pump app events until
// the controller leaves Pending, optionally copy through the presenter.

use crate::clipboard::{ClipboardError, ClipboardWriter};
use crate::events::{self, AppEvent};
use crate::shortener::api::{RequestError, ShortenApi};
use crate::shortener::controller::{SubmissionState, SubmitOutcome, REQUEST_FAILED_MESSAGE};
use crate::shortener::orchestrator::Orchestrator;
use crate::shortener::validate::ValidationError;
use std::sync::Arc;
use thiserror::Error;

/// Result of a successful headless run
#[derive(Debug, PartialEq, Eq)]
pub struct HeadlessReport {
    pub short_url: String,
    /// `None` when no copy was requested
    pub copied: Option<Result<(), ClipboardError>>,
}

/// Why a headless run produced no short URL
#[derive(Debug, Error)]
pub enum HeadlessError {
    #[error("{}", .0.user_message())]
    Invalid(ValidationError),
    /// The cause is only logged; users see the generic retry message
    #[error("{}", REQUEST_FAILED_MESSAGE)]
    Failed(RequestError),
    #[error("{}", REQUEST_FAILED_MESSAGE)]
    Interrupted,
}

/// Shorten `raw` once. Must be called from within a Tokio runtime.
pub async fn shorten_once(
    api: Arc<dyn ShortenApi>,
    clipboard: Arc<dyn ClipboardWriter>,
    raw: &str,
    copy: bool,
) -> Result<HeadlessReport, HeadlessError> {
    let (tx, mut rx) = events::channel();
    let mut orchestrator = Orchestrator::new(api, clipboard, tx);

    match orchestrator.submit(raw) {
        SubmitOutcome::Rejected(reason) => return Err(HeadlessError::Invalid(reason)),
        // A fresh orchestrator has nothing in flight
        SubmitOutcome::Refused => return Err(HeadlessError::Interrupted),
        SubmitOutcome::Dispatched(_) => {}
    }

    while orchestrator.state().is_pending() {
        match rx.recv().await {
            Some(event @ AppEvent::ShortenFinished(_)) => orchestrator.handle_event(event),
            Some(other) => tracing::trace!("Ignoring {:?} while waiting", other),
            None => return Err(HeadlessError::Interrupted),
        }
    }

    let short_url = match orchestrator.state() {
        SubmissionState::Success(url) => url.clone(),
        _ => {
            return Err(match orchestrator.last_error() {
                Some(err) => HeadlessError::Failed(err.clone()),
                None => HeadlessError::Interrupted,
            })
        }
    };

    let copied = if copy { orchestrator.copy() } else { None };

    Ok(HeadlessReport { short_url, copied })
}
