//! Date-range endpoint handlers.
//!
//! Returns {date, station, temperature} records for all observations on or
//! after a start date, optionally bounded by an inclusive end date. The
//! date parameters are not validated; they are compared as TEXT against the
//! stored YYYY-MM-DD strings, so a malformed parameter yields an empty or
//! wrong result rather than an error.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::handle_query_error;
use crate::logging::generate_request_id;
use crate::queries;
use crate::state::AppState;

/// Handle GET /api/v1.0/:start requests
pub async fn observations_from_handler(
    State(state): State<Arc<AppState>>,
    Path(start): Path<String>,
) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = "/api/v1.0/:start",
        request_id = %request_id,
        start = %start,
        "Processing open-ended date range request"
    );

    let result = async {
        let mut conn = state.pool.acquire().await?;
        queries::observations_from(&mut conn, &start).await
    }
    .await;

    match result {
        Ok(records) => {
            let duration = start_time.elapsed();
            info!(
                endpoint = "/api/v1.0/:start",
                request_id = %request_id,
                start = %start,
                duration_us = duration.as_micros() as u64,
                record_count = records.len(),
                "Date range request successful"
            );

            Json(records).into_response()
        }
        Err(error) => handle_query_error(
            error,
            "/api/v1.0/:start",
            &request_id,
            Some(&format!("start={}", start)),
        ),
    }
}

/// Handle GET /api/v1.0/:start/:end requests
pub async fn observations_between_handler(
    State(state): State<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = "/api/v1.0/:start/:end",
        request_id = %request_id,
        start = %start,
        end = %end,
        "Processing bounded date range request"
    );

    let result = async {
        let mut conn = state.pool.acquire().await?;
        queries::observations_between(&mut conn, &start, &end).await
    }
    .await;

    match result {
        Ok(records) => {
            let duration = start_time.elapsed();
            info!(
                endpoint = "/api/v1.0/:start/:end",
                request_id = %request_id,
                start = %start,
                end = %end,
                duration_us = duration.as_micros() as u64,
                record_count = records.len(),
                "Date range request successful"
            );

            Json(records).into_response()
        }
        Err(error) => handle_query_error(
            error,
            "/api/v1.0/:start/:end",
            &request_id,
            Some(&format!("start={}, end={}", start, end)),
        ),
    }
}
