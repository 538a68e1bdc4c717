// ShortURL Generator - terminal client for a URL shortening service
//
// Paste a long URL, get a short one back, copy it to the clipboard.
//
// Architecture:
// - Shortener core: validation, single-flight submission, result presenter
// - Endpoint (reqwest): POST {api_url}/v1/shorten, or a local demo generator
// - TUI (ratatui): form, result panel, system logs, status bar
// - Headless: `shorturl shorten <URL>` prints the short URL on stdout
// - Event system: an mpsc channel carries request completions and copy reverts

mod cli;
mod clipboard;
mod config;
mod demo;
mod events;
mod headless;
mod logging;
mod shortener;
mod startup;
mod theme;
mod tui;
mod util;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use clipboard::{ClipboardWriter, SystemClipboard};
use config::Config;
use logging::LogBuffer;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config management needs neither logging nor a loaded config
    if let Some(Commands::Config {
        show,
        reset,
        edit,
        path,
    }) = cli.command
    {
        return cli::handle_config(show, reset, edit, path);
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env()?;
    let clipboard: Arc<dyn ClipboardWriter> = Arc::new(SystemClipboard);

    match cli.command {
        Some(Commands::Shorten { url, copy }) => run_headless(&config, clipboard, &url, copy).await,
        _ if !config.enable_tui => {
            startup::print_startup(&config);
            eprintln!("TUI disabled. Use `shorturl shorten <URL>` to shorten a link.");
            Ok(())
        }
        _ => run_interactive(&config, clipboard).await,
    }
}

/// One submission; the short URL is the only thing written to stdout
async fn run_headless(
    config: &Config,
    clipboard: Arc<dyn ClipboardWriter>,
    url: &str,
    copy: bool,
) -> Result<()> {
    // Logs go to stderr so the output can be piped
    let _file_guard = logging::init(&config.logging, None);
    startup::print_startup(config);

    let api = shortener::endpoint_from_config(config)?;
    let report = headless::shorten_once(api, clipboard, url, copy).await?;

    println!("{}", report.short_url);
    match report.copied {
        Some(Ok(())) => eprintln!("✓ Copied to clipboard"),
        Some(Err(e)) => eprintln!("{}: {}", tui::app::COPY_FAILED_MESSAGE, e),
        None => {}
    }
    Ok(())
}

async fn run_interactive(config: &Config, clipboard: Arc<dyn ClipboardWriter>) -> Result<()> {
    // Capture logs to buffer (prevents garbling the display)
    let log_buffer = LogBuffer::new();
    let _file_guard = logging::init(&config.logging, Some(log_buffer.clone()));

    startup::print_startup(config);
    startup::log_startup(config);

    let api = shortener::endpoint_from_config(config)?;
    tui::run_tui(api, clipboard, log_buffer, config).await
}
