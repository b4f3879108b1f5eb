//! REST API endpoints.
//!
//! Axum-based HTTP API exposing the derived statistics views as JSON.

pub mod routes;
pub mod state;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::store::StoreError;
use state::AppState;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Forbidden")]
    Forbidden,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error")]
    Internal,
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(entity) => ApiError::NotFound(entity.to_string()),
            StoreError::Forbidden => ApiError::Forbidden,
            StoreError::Storage(e) => {
                // Upstream detail is logged, never returned to the caller
                error!("storage read failed: {}", e);
                ApiError::Internal
            }
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::Forbidden => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/matches/:ulid/stats", get(routes::matches::match_stats))
        .route(
            "/api/matches/:ulid/lineouts",
            get(routes::matches::match_lineouts),
        )
        .route("/api/matches/:ulid/kicks", get(routes::matches::match_kicks))
        .route(
            "/api/players/:id/summary",
            get(routes::players::player_summary),
        )
        .route(
            "/api/players/:id/averages",
            get(routes::players::player_averages),
        )
        .route("/api/teams/:id/record", get(routes::teams::team_record))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_not_found_maps_to_api_not_found() {
        let err: ApiError = StoreError::NotFound("match").into();
        assert!(matches!(err, ApiError::NotFound(m) if m == "match"));
    }

    #[test]
    fn test_store_forbidden_maps_to_api_forbidden() {
        let err: ApiError = StoreError::Forbidden.into();
        assert!(matches!(err, ApiError::Forbidden));
    }

    #[test]
    fn test_internal_error_message_is_generic() {
        assert_eq!(ApiError::Internal.to_string(), "Internal error");
    }
}
