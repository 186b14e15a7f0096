//! server — thin axum surface over [`SamplingService`](crate::service::SamplingService).
//!
//! # Endpoints
//!
//! - `GET  /`                          — plain-text description
//! - `GET  /api/v1/randomgen?numbers=N` — N draws, inverse-CDF sampler
//! - `GET  /api/v2/randomgen?numbers=N` — N draws, weighted-choice sampler
//! - `POST /api/config`                — `{"numbers": [...], "probabilities": [...]}`
//! - `GET|POST /api/reset`             — restore the default distribution
//!
//! Service failures are returned as `400 {"error": "<message>"}`.

pub mod routes;
pub mod state;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use self::routes::AppError;
pub use self::state::{AppState, SharedState};

/// Full application router with tracing and CORS layers applied.
pub fn app(state: SharedState) -> Router {
    Router::new()
        .merge(routes::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
