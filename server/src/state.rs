//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the pooled HTTP client used to reach the blog backend and the
//! backend origin. The host keeps no per-user state.

use std::sync::Arc;
use std::time::Duration;

use crate::config::HostConfig;

/// Clone is required by Axum; the client is internally reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub upstream: Arc<str>,
}

impl AppState {
    /// Build state for the configured upstream.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed (TLS
    /// backend initialization failure).
    pub fn new(config: &HostConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.proxy_timeout_secs))
            .build()?;
        Ok(Self { http, upstream: Arc::from(config.upstream.as_str()) })
    }
}
