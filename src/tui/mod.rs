// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks, app events)
// - Rendering the UI
// - Turning keys into orchestrator actions

pub mod app;
pub mod components;
pub mod input;
pub mod layout;
pub mod modal;
pub mod views;

use crate::clipboard::ClipboardWriter;
use crate::config::Config;
use crate::events::{self, EventReceiver};
use crate::logging::LogBuffer;
use crate::shortener::api::ShortenApi;
use crate::shortener::orchestrator::Orchestrator;
use crate::theme::Theme;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{
        self as term_event, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode,
        KeyEvent, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::{Modal, ModalAction};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop until the user quits, and
/// restores the terminal even when the loop fails.
pub async fn run_tui(
    api: Arc<dyn ShortenApi>,
    clipboard: Arc<dyn ClipboardWriter>,
    log_buffer: LogBuffer,
    config: &Config,
) -> Result<()> {
    let (event_tx, mut event_rx) = events::channel();
    let orchestrator = Orchestrator::new(api, clipboard, event_tx);
    let mut app = App::new(orchestrator, log_buffer, Theme::by_name(&config.theme));

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = run_event_loop(&mut terminal, &mut app, &mut event_rx).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on three sources:
/// 1. Keyboard input and pastes
/// 2. Timer ticks (spinner animation, uptime, toast expiry)
/// 3. App events from request tasks and revert timers
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_rx: &mut EventReceiver,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            _ = async {
                if term_event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match term_event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Paste(text)) => {
                            if app.modal.is_none() {
                                app.push_str(&text);
                            }
                        }
                        _ => {}
                    }
                }
            } => {}

            _ = tick_interval.tick() => {
                app.tick_animation();
            }

            Some(app_event) = event_rx.recv() => {
                app.handle_app_event(app_event);
            }
        }

        if app.should_quit {
            break;
        }
    }

    tracing::info!("Quitting");
    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Modal → Global actions → Text editing
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    // Layer 1: Modal captures all input when active
    if handle_modal_input(app, &key_event) {
        return;
    }

    match key_event.kind {
        KeyEventKind::Press => {}
        KeyEventKind::Release => {
            app.handle_key_release(key_event.code);
            return;
        }
        _ => return,
    }

    // Layer 2: Action keys
    if handle_global_keys(app, &key_event) {
        return;
    }

    // Layer 3: Text editing
    handle_text_input(app, &key_event);
}

/// Handle modal input - returns true if modal absorbed the input
fn handle_modal_input(app: &mut App, key_event: &KeyEvent) -> bool {
    let Some(ref mut modal) = app.modal else {
        return false;
    };

    // Always process Release events to keep InputHandler in sync
    // Without this, keys get stuck in "pressed" state after modal closes
    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return true;
    }

    if key_event.kind != KeyEventKind::Press {
        return true;
    }

    match modal.handle_input(key_event.code) {
        ModalAction::None => {}
        ModalAction::Close => {
            app.modal = None;
            // The closing key must not immediately retrigger behind the modal
            app.handle_key_press(key_event.code);
        }
    }

    true
}

/// Handle action keys - returns true if handled
/// Uses InputHandler for debounce (StateChange behavior = trigger once per press)
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    let key = key_event.code;
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

    match key {
        KeyCode::Char('c') if ctrl => {
            app.should_quit = true;
            true
        }
        KeyCode::Esc => {
            if app.handle_key_press(key) {
                app.should_quit = true;
            }
            true
        }
        KeyCode::Enter => {
            if app.handle_key_press(key) {
                app.submit();
            }
            true
        }
        KeyCode::Char('y') if ctrl => {
            if app.handle_key_press(key) && !app.copy() {
                app.show_toast("Nothing to copy yet");
            }
            true
        }
        KeyCode::Char('n') if ctrl => {
            if app.handle_key_press(key) {
                app.generate_new();
            }
            true
        }
        KeyCode::Char('u') if ctrl => {
            if app.handle_key_press(key) {
                app.clear_input();
            }
            true
        }
        // Bare shortcuts apply only with an empty field, otherwise they are text
        KeyCode::Char('?') if app.is_input_empty() => {
            if app.handle_key_press(key) {
                app.modal = Some(Modal::help());
            }
            true
        }
        KeyCode::Char('y') if app.is_input_empty() && app.has_result() => {
            if app.handle_key_press(key) {
                app.copy();
            }
            true
        }
        KeyCode::Char('n') if app.is_input_empty() && app.has_result() => {
            if app.handle_key_press(key) {
                app.generate_new();
            }
            true
        }
        _ => false,
    }
}

/// Typing and deleting in the URL field
fn handle_text_input(app: &mut App, key_event: &KeyEvent) {
    if key_event
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return;
    }
    match key_event.code {
        KeyCode::Char(c) => app.push_char(c),
        KeyCode::Backspace => app.backspace(),
        _ => {}
    }
}
