//! Orchestrator: owns the "current short URL" slot
//!
//! Composes the submission controller and, while a short URL exists, one
//! result presenter. The slot is re-synced from the controller state after
//! every transition, so `current_short_url()` is `Some` exactly when the
//! controller is in `Success`, and the presenter is mounted exactly then.

use super::api::{RequestError, ShortenApi};
use super::controller::{Resolution, SubmissionController, SubmissionState, SubmitOutcome};
use super::presenter::{ResultAction, ResultPresenter};
use crate::clipboard::{ClipboardError, ClipboardWriter};
use crate::events::{AppEvent, EventSender};
use std::sync::Arc;

pub struct Orchestrator {
    controller: SubmissionController,
    clipboard: Arc<dyn ClipboardWriter>,
    events: EventSender,
    current_short_url: Option<String>,
    presenter: Option<ResultPresenter>,
}

impl Orchestrator {
    pub fn new(
        api: Arc<dyn ShortenApi>,
        clipboard: Arc<dyn ClipboardWriter>,
        events: EventSender,
    ) -> Self {
        Self {
            controller: SubmissionController::new(api, events.clone()),
            clipboard,
            events,
            current_short_url: None,
            presenter: None,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        self.controller.state()
    }

    pub fn current_short_url(&self) -> Option<&str> {
        self.current_short_url.as_deref()
    }

    pub fn presenter(&self) -> Option<&ResultPresenter> {
        self.presenter.as_ref()
    }

    pub fn last_error(&self) -> Option<&RequestError> {
        self.controller.last_error()
    }

    pub fn endpoint(&self) -> String {
        self.controller.endpoint()
    }

    /// Submit raw input through the controller
    pub fn submit(&mut self, raw: &str) -> SubmitOutcome {
        let outcome = self.controller.submit(raw);
        self.sync_slot();
        outcome
    }

    /// Route an event posted by a background task
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ShortenFinished(completion) => {
                if self.controller.resolve(completion) == Resolution::Applied {
                    self.sync_slot();
                }
            }
            AppEvent::CopyReverted(token) => {
                // No presenter means the result was cleared; the revert is moot
                if let Some(presenter) = self.presenter.as_mut() {
                    presenter.on_revert(token);
                }
            }
        }
    }

    /// Copy the current short URL. `None` when there is nothing to copy.
    pub fn copy(&mut self) -> Option<Result<(), ClipboardError>> {
        self.presenter.as_mut().map(ResultPresenter::copy)
    }

    /// The presenter's "generate new" signal. Returns false with no result shown.
    pub fn generate_new(&mut self) -> bool {
        let Some(action) = self.presenter.as_ref().map(ResultPresenter::reset) else {
            return false;
        };
        match action {
            ResultAction::GenerateNew => self.on_reset(),
        }
        true
    }

    /// Clear the slot and return the controller to Idle
    pub fn on_reset(&mut self) {
        if !self.controller.reset() {
            return;
        }
        self.sync_slot();
    }

    fn on_submission_success(&mut self, short_url: String) {
        self.presenter = Some(ResultPresenter::new(
            short_url.clone(),
            Arc::clone(&self.clipboard),
            self.events.clone(),
        ));
        self.current_short_url = Some(short_url);
    }

    fn clear_slot(&mut self) {
        // Dropping the presenter aborts its revert timer
        self.presenter = None;
        self.current_short_url = None;
    }

    fn sync_slot(&mut self) {
        match self.controller.state() {
            SubmissionState::Success(url) => {
                if self.current_short_url.as_deref() != Some(url.as_str()) {
                    let url = url.clone();
                    self.on_submission_success(url);
                }
            }
            _ => {
                if self.current_short_url.is_some() {
                    self.clear_slot();
                }
            }
        }
    }
}
