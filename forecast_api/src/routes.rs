//! API route handlers

use crate::AppState;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use sales_forecast::{
    DataLoader, ForecastError, ForecastRecord, SalesForecaster, SalesSeries, DEFAULT_HORIZON,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Default number of periods when the query omits `periods`
pub const DEFAULT_PERIODS: usize = DEFAULT_HORIZON;

#[derive(Debug, Deserialize)]
pub struct PredictParams {
    /// Raw query value; parsed by hand so bad input yields a JSON error body
    pub periods: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UploadBody {
    pub csv: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub periods: usize,
    pub forecast: Vec<ForecastRecord>,
}

/// Error surfaced to API callers as a JSON body
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<ForecastError> for ApiError {
    fn from(err: ForecastError) -> Self {
        let status = match err {
            ForecastError::SchemaError(_)
            | ForecastError::ParseError(_)
            | ForecastError::FitError(_)
            | ForecastError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ForecastError::IoError(_) | ForecastError::SerializationError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Service metadata
pub async fn index() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Welcome to the Sales Forecasting API!",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "/health": "GET - Check API health",
            "/predict": "GET - Forecast using the bundled dataset (e.g. /predict?periods=60)",
            "/predict (POST)": "POST - Upload CSV data for forecasting (JSON body: {\"csv\": \"date,sales\\n2024-01-01,100\\n...\"})"
        }
    }))
}

/// Health probe
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Forecast from the bundled dataset, preferring the retrained artifact
pub async fn predict_default(
    State(state): State<AppState>,
    Query(params): Query<PredictParams>,
) -> Result<Json<PredictResponse>, ApiError> {
    let periods = parse_periods(&params)?;

    let series = match state.store.load()? {
        Some(artifact) => artifact.series,
        None => DataLoader::from_csv_path(&state.data_path)?,
    };

    run_forecast(series, periods)
}

/// Forecast from CSV text uploaded in the request body
pub async fn predict_upload(
    State(_state): State<AppState>,
    Query(params): Query<PredictParams>,
    body: Option<Json<UploadBody>>,
) -> Result<Json<PredictResponse>, ApiError> {
    let periods = parse_periods(&params)?;

    let csv = body
        .and_then(|Json(upload)| upload.csv)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| ApiError::bad_request("Missing 'csv' in JSON body"))?;

    let series = DataLoader::from_csv_str(&csv)?;
    run_forecast(series, periods)
}

fn run_forecast(series: SalesSeries, periods: usize) -> Result<Json<PredictResponse>, ApiError> {
    let points = SalesForecaster::default().fit_predict(&series, periods)?;
    Ok(Json(PredictResponse {
        periods,
        forecast: sales_forecast::to_records(&points),
    }))
}

fn parse_periods(params: &PredictParams) -> Result<usize, ApiError> {
    match params.periods.as_deref() {
        None => Ok(DEFAULT_PERIODS),
        Some(raw) => match raw.trim().parse::<i64>() {
            Ok(periods) if periods >= 1 => Ok(periods as usize),
            Ok(_) => Err(ApiError::bad_request("periods must be > 0")),
            Err(_) => Err(ApiError::bad_request("Invalid periods parameter")),
        },
    }
}
