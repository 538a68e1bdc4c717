// Components module - reusable UI building blocks
//
// - Title bar: App name, spinner, subtitle
// - Form: URL input and Generate button
// - Result panel: Short URL with copy / visit / generate new
// - Logs panel: System log entries
// - Status bar: Uptime, session counters, endpoint
// - Toast: Transient confirmation overlay

pub mod form;
pub mod logs_panel;
pub mod result_panel;
pub mod status_bar;
pub mod title_bar;
pub mod toast;

pub use toast::Toast;
