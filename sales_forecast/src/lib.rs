//! # Sales Forecast
//!
//! A Rust library for normalizing dated sales data and forecasting future
//! sales with uncertainty bounds.
//!
//! ## Features
//!
//! - Flexible CSV ingestion: recognized header aliases for the date and
//!   value columns, permissive date parsing, numeric coercion
//! - Forecasting via the augurs library (MSTL weekly-seasonal decomposition
//!   over AutoETS, with fallbacks for short histories)
//! - JSON-ready output records with ISO-8601 dates and rounded values
//! - A single-file model-artifact store for periodic retraining
//!
//! ## Quick Start
//!
//! ```no_run
//! use sales_forecast::response::to_records;
//! use sales_forecast::{DataLoader, SalesForecaster};
//!
//! fn main() -> sales_forecast::Result<()> {
//!     // Load and normalize data
//!     let series = DataLoader::from_csv_path("data/sales_data.csv")?;
//!
//!     // Fit a model and forecast 30 days ahead
//!     let points = SalesForecaster::default().fit_predict(&series, 30)?;
//!
//!     for record in to_records(&points) {
//!         println!("{}: {:.2} [{:.2}, {:.2}]",
//!             record.ds, record.yhat, record.yhat_lower, record.yhat_upper);
//!     }
//!     Ok(())
//! }
//! ```

pub mod data;
pub mod error;
pub mod forecast;
pub mod response;
pub mod store;

// Re-export commonly used types
pub use crate::data::{DataLoader, Observation, SalesSeries};
pub use crate::error::{ForecastError, Result};
pub use crate::forecast::{ForecastPoint, SalesForecaster, DEFAULT_HORIZON};
pub use crate::response::{to_records, ForecastRecord};
pub use crate::store::{ModelArtifact, ModelStore};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
