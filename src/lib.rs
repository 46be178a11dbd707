//! # Sales Forecast Workspace
//!
//! Workspace facade for the sales forecasting service. The ingestion and
//! forecasting pipeline lives in the [`sales_forecast`] crate; the HTTP
//! surface is the `forecast_api` binary and the periodic retraining job is
//! the `auto_retrain` binary.
//!
//! ## Example
//!
//! ```
//! use sales_forecast_workspace::DataLoader;
//!
//! let csv = "date,sales\n2024-01-01,100\n2024-01-02,120";
//! let series = DataLoader::from_csv_str(csv).unwrap();
//! assert_eq!(series.len(), 2);
//! ```

pub use sales_forecast::{
    DataLoader, ForecastError, ForecastPoint, ForecastRecord, ModelArtifact, ModelStore,
    Observation, SalesForecaster, SalesSeries,
};
