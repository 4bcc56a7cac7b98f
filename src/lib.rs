//! # kona
//!
//! A small, read-only HTTP API server for historical weather observations.
//!
//! This library provides the core functionality for serving a pre-built
//! SQLite dataset of daily precipitation and temperature readings over a
//! JSON HTTP API.
//!
//! ## Architecture
//!
//! - **Dataset layer**: opens the SQLite file read-only and validates its
//!   schema at startup
//! - **Query layer**: explicit, typed read-only accessors over the dataset
//! - **API layer**: axum handlers that map URL paths to queries and
//!   serialize the results to JSON arrays

pub mod config;
pub mod dataset;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod queries;
pub mod state;

pub use config::Config;
pub use error::{KonaError, Result};
pub use logging::{create_http_trace_layer, generate_request_id, init_tracing, log_request_error};
pub use state::{AppState, DatasetSummary};
