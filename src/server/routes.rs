//! HTTP route handlers for the sampling service.
//!
//! Endpoints accept query strings or JSON and return JSON, except `/`,
//! which returns the plain-text service description.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::warn;

use crate::sampling::SamplerKind;
use crate::server::state::SharedState;
use crate::service::{ConfigurationReport, GenerateReport, ServiceError};

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", get(describe_handler))
        .route("/api/v1/randomgen", get(generate_v1_handler))
        .route("/api/v2/randomgen", get(generate_v2_handler))
        .route("/api/config", post(config_handler))
        .route("/api/reset", get(reset_handler).post(reset_handler))
}

// ---------------------------------------------------------------------------
// GET /
// ---------------------------------------------------------------------------

async fn describe_handler(State(state): State<SharedState>) -> &'static str {
    state.service.describe()
}

// ---------------------------------------------------------------------------
// GET /api/v{1,2}/randomgen
// ---------------------------------------------------------------------------

/// Query string for the generate endpoints.
#[derive(Debug, Deserialize)]
struct GenerateQuery {
    /// Number of draws (default: 1).
    #[serde(default = "default_numbers")]
    numbers: i64,
}

fn default_numbers() -> i64 {
    1
}

async fn generate_v1_handler(
    State(state): State<SharedState>,
    query: Result<Query<GenerateQuery>, QueryRejection>,
) -> Result<Json<GenerateReport>, AppError> {
    generate(state, SamplerKind::InverseCdf, query).await
}

async fn generate_v2_handler(
    State(state): State<SharedState>,
    query: Result<Query<GenerateQuery>, QueryRejection>,
) -> Result<Json<GenerateReport>, AppError> {
    generate(state, SamplerKind::WeightedChoice, query).await
}

async fn generate(
    state: SharedState,
    kind: SamplerKind,
    query: Result<Query<GenerateQuery>, QueryRejection>,
) -> Result<Json<GenerateReport>, AppError> {
    let Query(query) = query.map_err(|e| AppError::bad_request(e.body_text()))?;
    let quantity = query.numbers;

    // Drawing and testing up to max_quantity values is CPU-bound.
    let report = tokio::task::spawn_blocking(move || state.service.generate(kind, quantity))
        .await
        .map_err(|e| AppError::internal(format!("generate task failed: {e}")))??;

    Ok(Json(report))
}

// ---------------------------------------------------------------------------
// POST /api/config
// ---------------------------------------------------------------------------

/// Request body for `/api/config`.
///
/// Both fields are taken as raw JSON so that shape errors surface as the
/// service's own type errors rather than a generic deserialization failure.
#[derive(Debug, Deserialize)]
struct ConfigRequest {
    #[serde(default, alias = "values")]
    numbers: serde_json::Value,

    #[serde(default)]
    probabilities: serde_json::Value,
}

async fn config_handler(
    State(state): State<SharedState>,
    body: Result<Json<ConfigRequest>, JsonRejection>,
) -> Result<Json<ConfigurationReport>, AppError> {
    let Json(req) = body.map_err(|e| AppError::bad_request(e.body_text()))?;
    let config = state.service.configure_json(&req.numbers, &req.probabilities)?;
    Ok(Json(config.into()))
}

// ---------------------------------------------------------------------------
// GET|POST /api/reset
// ---------------------------------------------------------------------------

async fn reset_handler(State(state): State<SharedState>) -> Json<ConfigurationReport> {
    Json(state.service.reset().into())
}

// ---------------------------------------------------------------------------
// Error handling
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    fn bad_request(msg: String) -> Self {
        warn!(error = %msg, "request rejected");
        Self { status: StatusCode::BAD_REQUEST, message: msg }
    }

    fn internal(msg: String) -> Self {
        tracing::error!(error = %msg, "internal error");
        Self { status: StatusCode::INTERNAL_SERVER_ERROR, message: msg }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        AppError::bad_request(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = serde_json::json!({
            "error": self.message,
        });
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::server::{app, AppState};
    use crate::service::ServiceOptions;

    fn test_app() -> axum::Router {
        let options = ServiceOptions { seed: Some(11), ..ServiceOptions::default() };
        app(Arc::new(AppState::new(options)))
    }

    async fn send(router: axum::Router, req: Request<Body>) -> (StatusCode, Vec<u8>) {
        let resp = router.oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    // Purpose
    // -------
    // Both generate routes return the documented report shape.
    async fn generate_routes_return_report() {
        for uri in ["/api/v1/randomgen?numbers=25", "/api/v2/randomgen?numbers=25"] {
            // Act
            let (status, body) = send(test_app(), get(uri)).await;

            // Assert
            assert_eq!(status, StatusCode::OK, "{uri}");
            let json: Value = serde_json::from_slice(&body).unwrap();
            assert_eq!(json["draws"].as_array().unwrap().len(), 25);
            let test = &json["quality"]["chi_square_test"];
            for key in ["accepts_null", "chi_square", "p_value", "degrees_of_freedom"] {
                assert!(test.get(key).is_some(), "missing {key}");
            }
            assert_eq!(json["quality"]["expected_histogram"]["1"], json!(0.58));
            assert!(json["quality"]["observed_histogram"].is_object());
        }
    }

    #[tokio::test]
    async fn generate_defaults_to_one_draw() {
        let (status, body) = send(test_app(), get("/api/v1/randomgen")).await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["draws"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    // Purpose
    // -------
    // Quantity violations and malformed queries map to 400 with an error
    // message.
    async fn generate_out_of_range_is_bad_request() {
        for uri in [
            "/api/v1/randomgen?numbers=0",
            "/api/v2/randomgen?numbers=10001",
            "/api/v1/randomgen?numbers=many",
        ] {
            let (status, body) = send(test_app(), get(uri)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            let json: Value = serde_json::from_slice(&body).unwrap();
            assert!(json["error"].is_string(), "{uri}");
        }
    }

    #[tokio::test]
    // Purpose
    // -------
    // configure replaces the distribution used by generate; reset restores
    // the defaults.
    async fn config_then_reset_round_trip() {
        // Arrange
        let router = test_app();

        // Act
        let (status, body) = send(
            router.clone(),
            post_json("/api/config", json!({"numbers": [4, 8], "probabilities": [0.5, 0.5]})),
        )
        .await;
        let (_, draws) = send(router.clone(), get("/api/v2/randomgen?numbers=50")).await;
        let (reset_status, reset_body) = send(router, get("/api/reset")).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        let config: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(config, json!({"values": [4.0, 8.0], "probabilities": [0.5, 0.5]}));

        let draws: Value = serde_json::from_slice(&draws).unwrap();
        assert!(draws["draws"]
            .as_array()
            .unwrap()
            .iter()
            .all(|d| d == &json!(4.0) || d == &json!(8.0)));

        assert_eq!(reset_status, StatusCode::OK);
        let reset: Value = serde_json::from_slice(&reset_body).unwrap();
        assert_eq!(reset["values"], json!([-1.0, 0.0, 1.0, 2.0, 3.0]));
        assert_eq!(reset["probabilities"], json!([0.01, 0.3, 0.58, 0.1, 0.01]));
    }

    #[tokio::test]
    // Purpose
    // -------
    // Invalid configurations are rejected with 400 and the validation
    // message.
    async fn config_validation_errors_are_bad_request() {
        let cases = [
            json!({"numbers": [1, 2], "probabilities": [0.5, 0.6]}),
            json!({"numbers": [], "probabilities": []}),
            json!({"numbers": [1, 2], "probabilities": [1.5, -0.5]}),
            json!({"numbers": "1,2", "probabilities": [0.5, 0.5]}),
            json!({"probabilities": [1.0]}),
        ];
        for case in cases {
            let (status, body) = send(test_app(), post_json("/api/config", case.clone())).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{case}");
            let json: Value = serde_json::from_slice(&body).unwrap();
            assert!(!json["error"].as_str().unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn reset_accepts_post() {
        let req = Request::builder()
            .method(Method::POST)
            .uri("/api/reset")
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(test_app(), req).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn root_returns_description() {
        let (status, body) = send(test_app(), get("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(String::from_utf8(body).unwrap().contains("/api/config"));
    }
}
