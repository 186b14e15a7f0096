//! Shared application state for the HTTP server.

use std::sync::Arc;

use crate::service::{SamplingService, ServiceOptions};

/// Shared state available to all request handlers.
#[derive(Debug)]
pub struct AppState {
    /// The sampling engine; owns the current configuration.
    pub service: SamplingService,
}

impl AppState {
    pub fn new(options: ServiceOptions) -> Self {
        Self { service: SamplingService::new(options) }
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState::new(ServiceOptions::default())
    }
}

/// Type alias used in axum handlers.
pub type SharedState = Arc<AppState>;
