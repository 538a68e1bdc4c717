// Input handling with per-key behaviors
//
// Action keys (Enter, Esc, copy, generate new) trigger once per press.
// Terminals that never send Release events still get a retrigger once the
// debounce window has passed. Text editing keys are unconfigured and always
// trigger, so fast typing never loses characters.

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Minimum gap between two triggers of a held StateChange key
const STATE_CHANGE_DEBOUNCE: Duration = Duration::from_millis(150);

/// Defines how a key should behave when pressed/held
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyBehavior {
    /// Trigger on every press event (typing, Backspace)
    Immediate,
    /// Trigger only on state change (press → release)
    StateChange,
}

/// Tracks the state of a single key
#[derive(Debug, Default)]
struct KeyState {
    is_pressed: bool,
    last_triggered: Option<Instant>,
}

/// Input handler that manages key behaviors
pub struct InputHandler {
    key_states: HashMap<KeyCode, KeyState>,
    key_behaviors: HashMap<KeyCode, KeyBehavior>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            key_states: HashMap::new(),
            key_behaviors: HashMap::new(),
        }
    }

    /// Configure a key's behavior
    pub fn configure_key(&mut self, key: KeyCode, behavior: KeyBehavior) {
        self.key_behaviors.insert(key, behavior);
    }

    /// Configure multiple keys with the same behavior
    pub fn configure_keys(&mut self, keys: &[KeyCode], behavior: KeyBehavior) {
        for key in keys {
            self.configure_key(*key, behavior);
        }
    }

    /// Handle a key press event
    /// Returns true if the action should be triggered
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.press_at(key, Instant::now())
    }

    fn press_at(&mut self, key: KeyCode, now: Instant) -> bool {
        let behavior = self
            .key_behaviors
            .get(&key)
            .copied()
            .unwrap_or(KeyBehavior::Immediate);

        if behavior == KeyBehavior::Immediate {
            return true;
        }

        let state = self.key_states.entry(key).or_default();
        if state.is_pressed {
            // Terminals without Release events: retrigger after the window
            match state.last_triggered {
                Some(last) if now.duration_since(last) >= STATE_CHANGE_DEBOUNCE => {
                    state.last_triggered = Some(now);
                    true
                }
                _ => false,
            }
        } else {
            state.is_pressed = true;
            state.last_triggered = Some(now);
            true
        }
    }

    /// Handle a key release event
    pub fn handle_key_release(&mut self, key: KeyCode) {
        if let Some(state) = self.key_states.get_mut(&key) {
            *state = KeyState::default();
        }
    }

    /// Default configuration: the app's action keys are StateChange
    pub fn with_default_config() -> Self {
        let mut handler = Self::new();
        handler.configure_keys(
            &[
                KeyCode::Enter,
                KeyCode::Esc,
                // Ctrl+Y / Ctrl+N / Ctrl+U share the plain char key codes
                KeyCode::Char('y'),
                KeyCode::Char('n'),
                KeyCode::Char('u'),
                KeyCode::Char('?'),
            ],
            KeyBehavior::StateChange,
        );
        handler
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::with_default_config()
    }
}
