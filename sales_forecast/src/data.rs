//! Normalization of raw sales data into a canonical time series

use crate::error::{ForecastError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Recognized header aliases for the timestamp column
pub const DATE_ALIASES: [&str; 5] = ["date", "ds", "order_date", "day", "timestamp"];

/// Recognized header aliases for the value column
pub const VALUE_ALIASES: [&str; 6] = ["sales", "y", "weekly_sales", "revenue", "amount", "value"];

/// Date formats accepted for the timestamp column, tried in order
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y"];

/// A single normalized observation: one calendar date and one sales value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Observation date
    pub ds: NaiveDate,
    /// Observed value
    pub y: f64,
}

/// Canonical sales time series, sorted by date ascending
///
/// Duplicate dates are preserved; deduplication is left to the caller or the
/// forecasting library.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Observation>", into = "Vec<Observation>")]
pub struct SalesSeries {
    observations: Vec<Observation>,
}

impl SalesSeries {
    /// Create a new series from observations, sorting them by date
    ///
    /// The sort is stable, so observations sharing a date keep their input
    /// order.
    pub fn new(mut observations: Vec<Observation>) -> Self {
        observations.sort_by_key(|obs| obs.ds);
        Self { observations }
    }

    /// Get the observations in date order
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Get the observed values in date order
    pub fn values(&self) -> Vec<f64> {
        self.observations.iter().map(|obs| obs.y).collect()
    }

    /// Get the last observed date
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.observations.last().map(|obs| obs.ds)
    }

    /// Count the distinct dates in the series
    pub fn distinct_dates(&self) -> usize {
        let mut count = 0;
        let mut previous: Option<NaiveDate> = None;
        for obs in &self.observations {
            if previous != Some(obs.ds) {
                count += 1;
                previous = Some(obs.ds);
            }
        }
        count
    }

    /// Check if the series is empty
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Get the length of the series
    pub fn len(&self) -> usize {
        self.observations.len()
    }
}

impl From<Vec<Observation>> for SalesSeries {
    fn from(observations: Vec<Observation>) -> Self {
        SalesSeries::new(observations)
    }
}

impl From<SalesSeries> for Vec<Observation> {
    fn from(series: SalesSeries) -> Self {
        series.observations
    }
}

/// Data loader that normalizes raw CSV into a [`SalesSeries`]
#[derive(Debug)]
pub struct DataLoader;

impl DataLoader {
    /// Normalize CSV text into a canonical sales series
    ///
    /// The header must contain one timestamp column (any of [`DATE_ALIASES`])
    /// and one value column (any of [`VALUE_ALIASES`]); matching is
    /// case-insensitive and whitespace-tolerant, and the first recognized
    /// column per family wins. Rows whose date or value cannot be parsed are
    /// dropped and logged, not fatal. Extra columns are ignored.
    pub fn from_csv_str(text: &str) -> Result<SalesSeries> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers = reader.headers()?.clone();
        let (date_idx, value_idx) = Self::resolve_columns(&headers)?;

        let mut observations = Vec::new();
        let mut dropped = 0usize;
        for (row, record) in reader.records().enumerate() {
            let record = record?;
            let raw_date = record.get(date_idx).unwrap_or("");
            let raw_value = record.get(value_idx).unwrap_or("");

            let ds = match Self::parse_date(raw_date) {
                Some(ds) => ds,
                None => {
                    tracing::debug!(row, value = raw_date, "dropping row with unparseable date");
                    dropped += 1;
                    continue;
                }
            };
            let y = match Self::parse_value(raw_value) {
                Some(y) => y,
                None => {
                    tracing::debug!(row, value = raw_value, "dropping row with non-numeric value");
                    dropped += 1;
                    continue;
                }
            };

            observations.push(Observation { ds, y });
        }

        if dropped > 0 {
            tracing::warn!(dropped, kept = observations.len(), "dropped unparseable rows");
        }

        Ok(SalesSeries::new(observations))
    }

    /// Load and normalize a CSV file from disk
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<SalesSeries> {
        let text = fs::read_to_string(path)?;
        Self::from_csv_str(&text)
    }

    /// Resolve the timestamp and value column indices from the header row
    fn resolve_columns(headers: &csv::StringRecord) -> Result<(usize, usize)> {
        let normalized: Vec<String> = headers
            .iter()
            .map(|name| name.trim().to_lowercase())
            .collect();

        let date_idx = normalized
            .iter()
            .position(|name| DATE_ALIASES.contains(&name.as_str()));
        let value_idx = normalized
            .iter()
            .position(|name| VALUE_ALIASES.contains(&name.as_str()));

        match (date_idx, value_idx) {
            (Some(date_idx), Some(value_idx)) => Ok((date_idx, value_idx)),
            _ => Err(ForecastError::SchemaError(format!(
                "CSV must contain a date column (one of {:?}) and a sales column (one of {:?}). Found: {:?}",
                DATE_ALIASES,
                VALUE_ALIASES,
                headers.iter().collect::<Vec<_>>()
            ))),
        }
    }

    /// Parse a date permissively, accepting several common formats
    ///
    /// Datetime strings contribute their date component only.
    fn parse_date(raw: &str) -> Option<NaiveDate> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        for format in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
                return Some(date);
            }
        }
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
            return Some(datetime.date());
        }
        if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
            return Some(datetime.date_naive());
        }

        None
    }

    /// Coerce a raw value to a finite f64
    ///
    /// Accepts thousands separators and a leading currency sign.
    fn parse_value(raw: &str) -> Option<f64> {
        let cleaned = raw.trim().trim_start_matches('$').replace(',', "");
        if cleaned.is_empty() {
            return None;
        }

        match cleaned.parse::<f64>() {
            Ok(value) if value.is_finite() => Some(value),
            _ => None,
        }
    }
}
