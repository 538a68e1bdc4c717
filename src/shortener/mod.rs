// Shortener core - submission and result state machines
//
// Leaf-first:
// - validate: raw text -> normalized URL or rejection reason
// - api/http: the remote endpoint contract and its reqwest implementation
// - controller: single-flight request lifecycle (Idle/Pending/Success/Failed)
// - presenter: copy-to-clipboard acknowledgement with timed revert
// - orchestrator: the "current short URL" slot wiring the above together

pub mod api;
pub mod controller;
pub mod http;
pub mod orchestrator;
pub mod presenter;
pub mod validate;

#[cfg(test)]
pub(crate) mod testing;

use crate::config::Config;
use crate::demo::DemoShortener;
use anyhow::Result;
use api::ShortenApi;
use http::HttpShortener;
use std::sync::Arc;

/// Build the endpoint selected by config (demo or HTTP)
pub fn endpoint_from_config(config: &Config) -> Result<Arc<dyn ShortenApi>> {
    if config.demo_mode {
        tracing::info!("Running in DEMO MODE - short URLs are generated locally");
        return Ok(Arc::new(DemoShortener::new()));
    }
    let api = HttpShortener::new(&config.api_url, config.request_timeout())?;
    Ok(Arc::new(api))
}
