//! # forecast_api
//!
//! REST API server for the sales_forecast pipeline: health probes plus a
//! forecast endpoint serving either the bundled dataset or uploaded CSV data.

use axum::routing::get;
use axum::Router;
use sales_forecast::ModelStore;
use std::path::PathBuf;

pub mod routes;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Path to the bundled sales dataset used by GET requests
    pub data_path: PathBuf,
    /// Store holding the artifact written by the retraining job
    pub store: ModelStore,
}

impl AppState {
    pub fn new(data_path: impl Into<PathBuf>, store: ModelStore) -> Self {
        Self {
            data_path: data_path.into(),
            store,
        }
    }
}

/// Build the application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/health", get(routes::health))
        .route(
            "/predict",
            get(routes::predict_default).post(routes::predict_upload),
        )
        .with_state(state)
}
