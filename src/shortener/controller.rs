//! Submission controller: the single-flight request lifecycle
//!
//! ```text
//!            submit (invalid)
//!   Idle ─────────────────────────────► Failed(reason)
//!    │  submit (valid)                     ▲
//!    ▼                                     │ non-201 / bad body / transport
//!  Pending ────────────────────────────────┤
//!    │  201 + short_url                    │
//!    ▼                                     │
//!  Success(short_url)                      │
//!    │                                     │
//!    └── submit / reset ──► Idle ◄─────────┘ submit / reset
//! ```
//!
//! While Pending, both `submit` and `reset` are refused, so at most one
//! request per controller is ever in flight. The request itself runs on a
//! spawned task that posts an [`AppEvent::ShortenFinished`] back to the event
//! loop; `resolve` only applies completions carrying the live ticket.

use super::api::{RequestError, ShortenApi, ShortenRequest, ShortenResponse};
use super::validate::{validate, ValidationError};
use crate::events::{AppEvent, EventSender};
use crate::util::truncate_utf8_safe;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Message shown for every request failure
pub const REQUEST_FAILED_MESSAGE: &str = "Failed to generate short URL. Please try again.";

static NEXT_CONTROLLER_ID: AtomicU64 = AtomicU64::new(1);

/// Observable state of a submission
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Success(String),
    Failed(String),
}

impl SubmissionState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn short_url(&self) -> Option<&str> {
        match self {
            Self::Success(url) => Some(url),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Identifies one outbound request of one controller instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestTicket {
    controller: u64,
    seq: u64,
}

/// Outcome of a request, posted back to the event loop
#[derive(Debug)]
pub struct ShortenCompletion {
    pub ticket: RequestTicket,
    pub result: Result<ShortenResponse, RequestError>,
}

/// What `submit` did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A request is already in flight
    Refused,
    /// Input failed validation; no request issued
    Rejected(ValidationError),
    /// Exactly one request was issued
    Dispatched(RequestTicket),
}

/// What `resolve` did with a completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    /// Ticket did not match the in-flight request
    Stale,
}

pub struct SubmissionController {
    id: u64,
    api: Arc<dyn ShortenApi>,
    events: EventSender,
    state: SubmissionState,
    in_flight: Option<RequestTicket>,
    next_seq: u64,
    last_error: Option<RequestError>,
}

impl SubmissionController {
    pub fn new(api: Arc<dyn ShortenApi>, events: EventSender) -> Self {
        Self {
            id: NEXT_CONTROLLER_ID.fetch_add(1, Ordering::Relaxed),
            api,
            events,
            state: SubmissionState::Idle,
            in_flight: None,
            next_seq: 0,
            last_error: None,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Underlying cause of the most recent request failure (diagnostics only)
    pub fn last_error(&self) -> Option<&RequestError> {
        self.last_error.as_ref()
    }

    /// Description of the endpoint requests go to
    pub fn endpoint(&self) -> String {
        self.api.describe()
    }

    /// Validate `raw` and, if valid, issue one shorten request
    ///
    /// Must be called from within a Tokio runtime.
    pub fn submit(&mut self, raw: &str) -> SubmitOutcome {
        if self.state.is_pending() {
            tracing::debug!("Submit refused: a request is already in flight");
            return SubmitOutcome::Refused;
        }

        // Clear the previous result before anything else
        self.state = SubmissionState::Idle;
        self.last_error = None;

        let url = match validate(raw) {
            Ok(url) => url,
            Err(reason) => {
                tracing::debug!("Rejected input: {}", reason);
                self.state = SubmissionState::Failed(reason.user_message().to_string());
                return SubmitOutcome::Rejected(reason);
            }
        };

        let ticket = RequestTicket {
            controller: self.id,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.in_flight = Some(ticket);
        self.state = SubmissionState::Pending;

        tracing::info!("Shortening {}", truncate_utf8_safe(&url, 120));

        let api = Arc::clone(&self.api);
        let events = self.events.clone();
        let request = ShortenRequest { url };
        tokio::spawn(async move {
            let result = api.shorten(&request).await;
            // A closed channel means the event loop is gone; nothing to apply to
            let _ = events.send(AppEvent::ShortenFinished(ShortenCompletion { ticket, result }));
        });

        SubmitOutcome::Dispatched(ticket)
    }

    /// Apply a completion if it belongs to the in-flight request
    pub fn resolve(&mut self, completion: ShortenCompletion) -> Resolution {
        if self.in_flight != Some(completion.ticket) {
            tracing::debug!(
                "Ignoring stale shorten response {:?} (in flight: {:?})",
                completion.ticket,
                self.in_flight
            );
            return Resolution::Stale;
        }
        self.in_flight = None;

        let outcome = completion.result.and_then(|response| {
            if !response.message.is_empty() {
                tracing::debug!("Service says: {}", response.message);
            }
            response.into_short_url()
        });

        match outcome {
            Ok(short_url) => {
                tracing::info!("Short URL generated: {}", short_url);
                self.state = SubmissionState::Success(short_url);
            }
            Err(err) => {
                tracing::error!("Failed to generate short URL: {}", err);
                self.last_error = Some(err);
                self.state = SubmissionState::Failed(REQUEST_FAILED_MESSAGE.to_string());
            }
        }

        Resolution::Applied
    }

    /// Return to Idle from Success or Failed. Refused while Pending.
    pub fn reset(&mut self) -> bool {
        if self.state.is_pending() {
            tracing::debug!("Reset refused: a request is still in flight");
            return false;
        }
        self.state = SubmissionState::Idle;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{self, EventReceiver};
    use crate::shortener::testing::FakeApi;

    fn controller(api: &Arc<FakeApi>) -> (SubmissionController, EventReceiver) {
        let (tx, rx) = events::channel();
        let api: Arc<dyn ShortenApi> = api.clone();
        (SubmissionController::new(api, tx), rx)
    }

    async fn next_completion(rx: &mut EventReceiver) -> ShortenCompletion {
        match rx.recv().await {
            Some(AppEvent::ShortenFinished(completion)) => completion,
            other => panic!("expected a shorten completion, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn blank_input_is_rejected_without_a_request() {
        let api = Arc::new(FakeApi::replying("ok", "http://x/abc"));
        let (mut controller, _rx) = controller(&api);

        for raw in ["", "   ", "\t\n"] {
            assert_eq!(
                controller.submit(raw),
                SubmitOutcome::Rejected(ValidationError::Missing)
            );
            assert_eq!(
                controller.state(),
                &SubmissionState::Failed("Please enter a URL.".to_string())
            );
        }

        tokio::task::yield_now().await;
        assert_eq!(api.calls(), 0);
    }

    #[tokio::test]
    async fn malformed_input_is_rejected_with_reason() {
        let api = Arc::new(FakeApi::replying("ok", "http://x/abc"));
        let (mut controller, _rx) = controller(&api);

        assert_eq!(
            controller.submit("not a url"),
            SubmitOutcome::Rejected(ValidationError::Malformed)
        );
        assert_eq!(
            controller.state().error_message(),
            Some("Please enter a valid URL.")
        );

        tokio::task::yield_now().await;
        assert_eq!(api.calls(), 0);
    }

    #[tokio::test]
    async fn created_response_moves_pending_to_success() {
        let api = Arc::new(FakeApi::replying("ok", "http://x/abc"));
        let (mut controller, mut rx) = controller(&api);

        assert!(matches!(
            controller.submit("https://example.com/a"),
            SubmitOutcome::Dispatched(_)
        ));
        assert_eq!(controller.state(), &SubmissionState::Pending);

        let completion = next_completion(&mut rx).await;
        assert_eq!(controller.resolve(completion), Resolution::Applied);
        assert_eq!(
            controller.state(),
            &SubmissionState::Success("http://x/abc".to_string())
        );
        assert_eq!(api.calls(), 1);
        assert_eq!(api.requests()[0].url, "https://example.com/a");
    }

    #[tokio::test]
    async fn server_error_moves_pending_to_generic_failure() {
        let api = Arc::new(FakeApi::failing(RequestError::Status {
            status: 500,
            body: "boom".to_string(),
        }));
        let (mut controller, mut rx) = controller(&api);

        controller.submit("https://example.com");
        let completion = next_completion(&mut rx).await;
        controller.resolve(completion);

        assert_eq!(
            controller.state(),
            &SubmissionState::Failed(REQUEST_FAILED_MESSAGE.to_string())
        );
        assert!(matches!(
            controller.last_error(),
            Some(RequestError::Status { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn transport_failure_moves_pending_to_generic_failure() {
        let api = Arc::new(FakeApi::failing(RequestError::Transport(
            "connection refused".to_string(),
        )));
        let (mut controller, mut rx) = controller(&api);

        controller.submit("https://example.com");
        let completion = next_completion(&mut rx).await;
        controller.resolve(completion);

        assert_eq!(controller.state().error_message(), Some(REQUEST_FAILED_MESSAGE));
        // The verbatim cause never reaches the user-facing message
        assert!(!controller
            .state()
            .error_message()
            .unwrap()
            .contains("connection refused"));
    }

    #[tokio::test]
    async fn empty_short_url_is_a_failure() {
        let api = Arc::new(FakeApi::replying("ok", ""));
        let (mut controller, mut rx) = controller(&api);

        controller.submit("https://example.com");
        let completion = next_completion(&mut rx).await;
        controller.resolve(completion);

        assert_eq!(controller.state().error_message(), Some(REQUEST_FAILED_MESSAGE));
        assert_eq!(controller.last_error(), Some(&RequestError::EmptyShortUrl));
    }

    #[tokio::test]
    async fn repeated_submits_while_pending_issue_one_request() {
        let (api, gate) = FakeApi::replying("ok", "http://x/abc").gated();
        let api = Arc::new(api);
        let (mut controller, mut rx) = controller(&api);

        assert!(matches!(
            controller.submit("https://example.com/1"),
            SubmitOutcome::Dispatched(_)
        ));
        for _ in 0..5 {
            assert_eq!(controller.submit("https://example.com/2"), SubmitOutcome::Refused);
            tokio::task::yield_now().await;
        }
        assert!(!controller.reset(), "reset must be refused while pending");
        assert_eq!(controller.state(), &SubmissionState::Pending);

        gate.notify_one();
        let completion = next_completion(&mut rx).await;
        controller.resolve(completion);

        assert_eq!(api.calls(), 1);
        assert_eq!(api.requests()[0].url, "https://example.com/1");
        assert_eq!(controller.state().short_url(), Some("http://x/abc"));
    }

    #[tokio::test]
    async fn submit_clears_previous_result_first() {
        let api = Arc::new(FakeApi::replying("ok", "http://x/abc"));
        let (mut controller, mut rx) = controller(&api);

        controller.submit("https://example.com");
        let completion = next_completion(&mut rx).await;
        controller.resolve(completion);
        assert!(controller.state().short_url().is_some());

        controller.submit("nope");
        assert_eq!(
            controller.state().error_message(),
            Some("Please enter a valid URL.")
        );
    }

    #[tokio::test]
    async fn completion_from_another_controller_is_stale() {
        let api = Arc::new(FakeApi::replying("ok", "http://x/abc"));
        let (mut first, mut first_rx) = controller(&api);
        let (mut second, _second_rx) = controller(&api);

        first.submit("https://example.com");
        second.submit("https://example.com");
        let completion = next_completion(&mut first_rx).await;

        assert_eq!(second.resolve(completion), Resolution::Stale);
        assert_eq!(second.state(), &SubmissionState::Pending);
    }

    #[tokio::test]
    async fn reset_returns_to_idle() {
        let api = Arc::new(FakeApi::replying("ok", "http://x/abc"));
        let (mut controller, mut rx) = controller(&api);

        controller.submit("https://example.com");
        let completion = next_completion(&mut rx).await;
        controller.resolve(completion);

        assert!(controller.reset());
        assert_eq!(controller.state(), &SubmissionState::Idle);
    }
}
