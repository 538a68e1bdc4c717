// Startup module - displays banner and effective configuration
//
// Printed before the TUI takes over the screen (or before a headless run),
// then mirrored into the System Logs panel.

use crate::config::{Config, VERSION};

/// ANSI color codes for terminal output
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const MAGENTA: &str = "\x1b[35m";
}

/// Where requests are going, as shown to the user
fn endpoint_line(config: &Config) -> String {
    if config.demo_mode {
        "in-process demo shortener".to_string()
    } else {
        format!("{}/v1/shorten", config.api_url.trim_end_matches('/'))
    }
}

/// Print the startup banner to stderr
///
/// stderr keeps stdout clean for `shorturl shorten` output.
pub fn print_startup(config: &Config) {
    use colors::*;

    eprintln!();
    eprintln!("  {BOLD}{CYAN}ShortURL Generator{RESET} {DIM}v{VERSION}{RESET}");
    eprintln!("  {DIM}Convert long URLs into short, easy-to-share links.{RESET}");
    eprintln!();

    if let Some(path) = Config::config_path() {
        if path.exists() {
            eprintln!("  {DIM}Config:{RESET} {GREEN}✓{RESET} {}", path.display());
        } else {
            eprintln!("  {DIM}Config:{RESET} {DIM}(using defaults){RESET}");
        }
    }

    eprintln!(
        "  {MAGENTA}▸{RESET} Endpoint {BOLD}{}{RESET} {DIM}(timeout {}s){RESET}",
        endpoint_line(config),
        config.request_timeout_secs
    );
    if config.demo_mode {
        eprintln!("  {YELLOW}▸{RESET} {YELLOW}Demo mode active{RESET} {DIM}(no backend needed){RESET}");
    }
    if config.logging.file_enabled {
        eprintln!(
            "  {DIM}▸ File logs: {}/{}.*{RESET}",
            config.logging.file_dir.display(),
            config.logging.file_prefix
        );
    }
    eprintln!();
}

/// Print startup messages to the TUI log panel
pub fn log_startup(config: &Config) {
    tracing::info!("═══════════════════════════════════");
    tracing::info!("  ShortURL Generator v{}", VERSION);
    tracing::info!("═══════════════════════════════════");

    match Config::config_path() {
        Some(path) if path.exists() => tracing::info!("Config: {}", path.display()),
        _ => tracing::info!("Config: using defaults"),
    }

    tracing::info!("▸ Endpoint {}", endpoint_line(config));
    if config.demo_mode {
        tracing::info!("▸ Demo mode active (short URLs generated locally)");
    }

    tracing::info!("Ready. Paste a long URL and press Enter.");
}
