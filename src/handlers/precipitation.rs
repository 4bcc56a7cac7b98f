//! Precipitation endpoint handler.
//!
//! Returns every observation as a {date, precipitation} record, one per
//! observation row, in storage order.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::handle_query_error;
use crate::logging::generate_request_id;
use crate::queries;
use crate::state::AppState;

/// Handle GET /api/v1.0/precipitation requests
pub async fn precipitation_handler(State(state): State<Arc<AppState>>) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = "/api/v1.0/precipitation",
        request_id = %request_id,
        "Processing precipitation request"
    );

    let result = async {
        let mut conn = state.pool.acquire().await?;
        queries::all_precipitation(&mut conn).await
    }
    .await;

    match result {
        Ok(records) => {
            let duration = start_time.elapsed();
            info!(
                endpoint = "/api/v1.0/precipitation",
                request_id = %request_id,
                duration_us = duration.as_micros() as u64,
                record_count = records.len(),
                "Precipitation request successful"
            );

            Json(records).into_response()
        }
        Err(error) => handle_query_error(error, "/api/v1.0/precipitation", &request_id, None),
    }
}
