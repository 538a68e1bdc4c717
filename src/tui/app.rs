// TUI application state
//
// Wraps the orchestrator with everything that is purely presentational:
// the input buffer, modal and toast overlays, theme, spinner, and the
// in-memory session counters shown in the status bar.

use super::components::Toast;
use super::input::InputHandler;
use super::modal::Modal;
use crate::events::AppEvent;
use crate::logging::LogBuffer;
use crate::shortener::controller::{SubmissionState, SubmitOutcome};
use crate::shortener::orchestrator::Orchestrator;
use crate::theme::Theme;
use crate::util::format_uptime;
use crossterm::event::KeyCode;
use std::time::Instant;

/// Alert text when a copy fails
pub const COPY_FAILED_MESSAGE: &str = "Failed to copy to clipboard";

/// Braille spinner frames, advanced on every tick while Pending
const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Counters for this session only
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub shortened: u64,
    pub failed: u64,
    pub copied: u64,
}

/// Main application state for the TUI
pub struct App {
    pub orchestrator: Orchestrator,

    /// Current contents of the URL field
    pub input: String,

    /// Active modal overlay (captures all input)
    pub modal: Option<Modal>,

    /// Transient confirmation in the corner
    pub toast: Option<Toast>,

    pub theme: Theme,

    /// Log buffer for system logs display
    pub log_buffer: LogBuffer,

    pub stats: SessionStats,

    /// Where requests go, for the status bar
    pub endpoint: String,

    /// Whether the app should quit
    pub should_quit: bool,

    /// When the app started (for uptime display)
    start_time: Instant,

    /// Input handler for flexible key behavior
    input_handler: InputHandler,

    /// Spinner animation frame
    animation_frame: usize,
}

impl App {
    pub fn new(orchestrator: Orchestrator, log_buffer: LogBuffer, theme: Theme) -> Self {
        let endpoint = orchestrator.endpoint();
        Self {
            orchestrator,
            input: String::new(),
            modal: None,
            toast: None,
            theme,
            log_buffer,
            stats: SessionStats::default(),
            endpoint,
            should_quit: false,
            start_time: Instant::now(),
            input_handler: InputHandler::default(),
            animation_frame: 0,
        }
    }

    // ─── Input plumbing ──────────────────────────────────────

    /// Handle a key press - returns true if the action should be triggered
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    /// Handle a key release
    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.input_handler.handle_key_release(key);
    }

    pub fn push_char(&mut self, c: char) {
        if !c.is_control() {
            self.input.push(c);
        }
    }

    /// Insert pasted text; line breaks and other control characters are dropped
    pub fn push_str(&mut self, text: &str) {
        self.input.extend(text.chars().filter(|c| !c.is_control()));
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    pub fn is_input_empty(&self) -> bool {
        self.input.is_empty()
    }

    // ─── Animation / timing ──────────────────────────────────

    /// Advance animation frame (called on tick)
    pub fn tick_animation(&mut self) {
        if self.is_pending() {
            self.animation_frame = (self.animation_frame + 1) % SPINNER.len();
        }
    }

    pub fn spinner_char(&self) -> char {
        SPINNER[self.animation_frame]
    }

    /// Get uptime as a formatted string
    pub fn uptime(&self) -> String {
        format_uptime(self.start_time.elapsed().as_secs())
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    // ─── Shortener actions ───────────────────────────────────

    pub fn state(&self) -> &SubmissionState {
        self.orchestrator.state()
    }

    pub fn is_pending(&self) -> bool {
        self.state().is_pending()
    }

    pub fn has_result(&self) -> bool {
        self.orchestrator.current_short_url().is_some()
    }

    /// Submit the current input. Must be called from within a Tokio runtime.
    pub fn submit(&mut self) -> SubmitOutcome {
        let outcome = self.orchestrator.submit(&self.input);
        if outcome == SubmitOutcome::Refused {
            self.show_toast("Still generating...");
        }
        outcome
    }

    /// Copy the displayed short URL. Returns false when there is none.
    pub fn copy(&mut self) -> bool {
        match self.orchestrator.copy() {
            None => false,
            Some(Ok(())) => {
                self.stats.copied += 1;
                self.show_toast("✓ Copied to clipboard");
                true
            }
            Some(Err(_)) => {
                // Blocking notice; the presenter stays in its previous state
                self.modal = Some(Modal::alert("Clipboard", COPY_FAILED_MESSAGE));
                true
            }
        }
    }

    /// Clear the displayed result and the input. Returns false when there is none.
    pub fn generate_new(&mut self) -> bool {
        if !self.orchestrator.generate_new() {
            return false;
        }
        self.input.clear();
        true
    }

    /// Apply an event from a background task and count finished requests
    pub fn handle_app_event(&mut self, event: AppEvent) {
        let was_pending = self.is_pending();
        self.orchestrator.handle_event(event);
        if !was_pending || self.is_pending() {
            return;
        }
        match self.state() {
            SubmissionState::Success(_) => self.stats.shortened += 1,
            SubmissionState::Failed(_) => self.stats.failed += 1,
            _ => {}
        }
    }
}
