//! REST API endpoints.
//!
//! Axum-based HTTP API serving the enriched player table and the views
//! derived from it (rankings, comparisons, averages, chart series).

pub mod routes;
pub mod state;

use axum::{
    http::{HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use thiserror::Error;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::calculate::CalculateError;
use state::AppState;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<CalculateError> for ApiError {
    fn from(err: CalculateError) -> Self {
        match err {
            CalculateError::NoData { .. } => ApiError::NotFound(err.to_string()),
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
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
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

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(routes::stats::health))
        .route("/api/fields", get(routes::stats::fields))
        .route("/api/summary", get(routes::stats::summary))
        .route("/api/average", get(routes::stats::average))
        .route("/api/scatter", get(routes::stats::scatter))
        .route("/api/ranking", get(routes::ranking::ranking))
        .route("/api/players", get(routes::players::list_players))
        .route("/api/players/names", get(routes::players::player_names))
        .route("/api/players/:name/radar", get(routes::players::player_radar))
        .route("/api/compare", get(routes::players::compare))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS policy for the configured origin (`*` allows any).
pub fn cors_layer(origin: &str) -> Result<CorsLayer, axum::http::header::InvalidHeaderValue> {
    let allow_origin = if origin == "*" {
        AllowOrigin::any()
    } else {
        AllowOrigin::exact(HeaderValue::from_str(origin)?)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET]))
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn test_api_error_codes() {
        let resp = ApiError::NotFound("x".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = ApiError::BadRequest("x".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_no_data_maps_to_not_found() {
        let err: ApiError = CalculateError::NoData {
            field: crate::models::StatField::FgPct,
        }
        .into();
        assert!(matches!(err, ApiError::NotFound(_)));
        assert!(err.to_string().contains("fg_pct"));
    }

    #[test]
    fn test_cors_layer() {
        assert!(cors_layer("*").is_ok());
        assert!(cors_layer("http://localhost:3000").is_ok());
        assert!(cors_layer("bad\nvalue").is_err());
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let app = build_router(setup_test_state());
        let (status, _) = get_json(app, "/api/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
