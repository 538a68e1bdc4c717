// Events delivered back to the event loop by background tasks
//
// Request tasks and revert timers never touch state directly. They post an
// AppEvent on the app channel and the loop applies it to the orchestrator.

use crate::shortener::controller::ShortenCompletion;
use crate::shortener::presenter::RevertToken;
use tokio::sync::mpsc;

/// Work finished off the event loop
#[derive(Debug)]
pub enum AppEvent {
    /// A shorten request resolved (success or failure)
    ShortenFinished(ShortenCompletion),
    /// A clipboard revert timer fired
    CopyReverted(RevertToken),
}

pub type EventSender = mpsc::UnboundedSender<AppEvent>;
pub type EventReceiver = mpsc::UnboundedReceiver<AppEvent>;

/// Create the app event channel
pub fn channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded_channel()
}
