//! HTTP request handlers for the kona API.
//!
//! This module contains all the endpoint handlers for the web server and
//! the router that wires them together.

pub mod home;
pub mod precipitation;
pub mod range;
pub mod stations;
pub mod tobs;

pub use home::home_handler;
pub use precipitation::precipitation_handler;
pub use range::{observations_between_handler, observations_from_handler};
pub use stations::stations_handler;
pub use tobs::tobs_handler;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{routing::get, Json, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::error::KonaError;
use crate::logging::{create_http_trace_layer, log_request_error};
use crate::state::AppState;

/// Build the application router with all routes attached.
///
/// Exact paths are matched before the parameterized date routes.
pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/api/v1.0/precipitation", get(precipitation_handler))
        .route("/api/v1.0/stations", get(stations_handler))
        .route("/api/v1.0/tobs", get(tobs_handler))
        .route("/api/v1.0/:start", get(observations_from_handler))
        .route("/api/v1.0/:start/:end", get(observations_between_handler))
        .layer(CorsLayer::permissive())
        .layer(create_http_trace_layer())
        .with_state(state)
}

/// Handle error responses for data queries.
///
/// Every handler fault maps to a generic 500 with a JSON error body. Empty
/// result sets are not errors and never reach this path.
pub(crate) fn handle_query_error(
    error: KonaError,
    endpoint: &str,
    request_id: &str,
    params: Option<&str>,
) -> Response {
    log_request_error(&error, endpoint, request_id, params);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({
            "error": error.to_string(),
            "request_id": request_id
        })),
    )
        .into_response()
}
