//! Shaping of forecast output for JSON consumers

use crate::forecast::ForecastPoint;
use serde::{Deserialize, Serialize};

/// One forecast period shaped for serialization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRecord {
    /// Forecasted date, ISO-8601
    pub ds: String,
    /// Point prediction, rounded
    pub yhat: f64,
    /// Lower confidence bound, rounded
    pub yhat_lower: f64,
    /// Upper confidence bound, rounded
    pub yhat_upper: f64,
}

/// Shape forecast points into plain records
///
/// Pass-through only: dates become ISO-8601 strings and numeric fields are
/// rounded to two decimal places.
pub fn to_records(points: &[ForecastPoint]) -> Vec<ForecastRecord> {
    points
        .iter()
        .map(|point| ForecastRecord {
            ds: point.ds.format("%Y-%m-%d").to_string(),
            yhat: round2(point.yhat),
            yhat_lower: round2(point.yhat_lower),
            yhat_upper: round2(point.yhat_upper),
        })
        .collect()
}

/// Round to two decimal places
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
