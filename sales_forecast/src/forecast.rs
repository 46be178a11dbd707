//! Forecasting of sales series via the augurs time-series library

use crate::data::SalesSeries;
use crate::error::{ForecastError, Result};
use augurs::ets::AutoETS;
use augurs::forecaster::{transforms::LinearInterpolator, Forecaster, Transformer};
use augurs::mstl::MSTLModel;
use chrono::{Duration, NaiveDate};

/// Default number of future periods to forecast
pub const DEFAULT_HORIZON: usize = 30;

/// Default confidence level for prediction intervals
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

/// Weekly seasonality period (7 days)
const WEEKLY_PERIOD: usize = 7;

/// Minimum observations for seasonal (MSTL) fitting: two full weekly cycles
const MIN_SEASONAL_OBSERVATIONS: usize = 14;

/// Minimum observations for ETS fitting
const MIN_TREND_OBSERVATIONS: usize = 7;

/// Interval width fraction used when the model returns no intervals
const FALLBACK_INTERVAL_FRACTION: f64 = 0.15;

/// One forecasted period with its uncertainty bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastPoint {
    /// Forecasted date
    pub ds: NaiveDate,
    /// Point prediction
    pub yhat: f64,
    /// Lower confidence bound
    pub yhat_lower: f64,
    /// Upper confidence bound
    pub yhat_upper: f64,
}

/// Forecaster for daily sales series
///
/// Model selection depends on history length: with at least two full weekly
/// cycles the series is fitted with MSTL (weekly seasonal decomposition) over
/// an AutoETS trend model; shorter histories fall back to plain non-seasonal
/// AutoETS, and very short ones to a drift projection.
#[derive(Debug, Clone)]
pub struct SalesForecaster {
    confidence_level: f64,
}

impl Default for SalesForecaster {
    fn default() -> Self {
        Self {
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
        }
    }
}

impl SalesForecaster {
    /// Create a forecaster with a custom confidence level
    pub fn new(confidence_level: f64) -> Result<Self> {
        if !(confidence_level > 0.0 && confidence_level < 1.0) {
            return Err(ForecastError::ValidationError(
                "Confidence level must be between 0 and 1".to_string(),
            ));
        }

        Ok(Self { confidence_level })
    }

    /// Get the configured confidence level
    pub fn confidence_level(&self) -> f64 {
        self.confidence_level
    }

    /// Fit a model to the series and forecast `horizon` future periods
    ///
    /// Produces exactly `horizon` points, one per day after the last observed
    /// date, each satisfying `yhat_lower <= yhat <= yhat_upper`.
    pub fn fit_predict(&self, series: &SalesSeries, horizon: usize) -> Result<Vec<ForecastPoint>> {
        if horizon < 1 {
            return Err(ForecastError::ValidationError(
                "horizon must be at least 1".to_string(),
            ));
        }
        if series.is_empty() {
            return Err(ForecastError::FitError(
                "Empty time series data".to_string(),
            ));
        }
        if series.distinct_dates() < 2 {
            return Err(ForecastError::FitError(
                "Need at least 2 distinct dates to fit a model".to_string(),
            ));
        }

        let values = series.values();
        let (point, lower, upper) = if values.len() >= MIN_SEASONAL_OBSERVATIONS {
            let forecast = self.forecast_with_mstl(&values, horizon)?;
            self.split_forecast(forecast, horizon)?
        } else if values.len() >= MIN_TREND_OBSERVATIONS {
            let forecast = self.forecast_with_ets(&values, horizon)?;
            self.split_forecast(forecast, horizon)?
        } else {
            self.forecast_with_drift(&values, horizon)
        };

        let last_date = series.last_date().ok_or_else(|| {
            ForecastError::FitError("Empty time series data".to_string())
        })?;

        let mut points = Vec::with_capacity(horizon);
        for (i, &yhat) in point.iter().enumerate() {
            if !yhat.is_finite() {
                return Err(ForecastError::FitError(
                    "Model produced a non-finite forecast".to_string(),
                ));
            }
            let ds = last_date + Duration::days(i as i64 + 1);
            points.push(ForecastPoint {
                ds,
                yhat,
                yhat_lower: lower[i].min(yhat),
                yhat_upper: upper[i].max(yhat),
            });
        }

        Ok(points)
    }

    /// Forecast using MSTL (weekly seasonal decomposition) with an AutoETS trend model
    fn forecast_with_mstl(&self, values: &[f64], horizon: usize) -> Result<augurs::Forecast> {
        let trend = AutoETS::non_seasonal().into_trend_model();
        let model = MSTLModel::new(vec![WEEKLY_PERIOD], trend);

        let transformers: Vec<Box<dyn Transformer>> =
            vec![Box::new(LinearInterpolator::default())];
        let mut forecaster = Forecaster::new(model).with_transformers(transformers);

        forecaster
            .fit(values)
            .map_err(|e| ForecastError::FitError(e.to_string()))?;
        forecaster
            .predict(horizon, self.confidence_level)
            .map_err(|e| ForecastError::FitError(e.to_string()))
    }

    /// Forecast using plain non-seasonal AutoETS
    fn forecast_with_ets(&self, values: &[f64], horizon: usize) -> Result<augurs::Forecast> {
        let model = AutoETS::non_seasonal();

        let transformers: Vec<Box<dyn Transformer>> =
            vec![Box::new(LinearInterpolator::default())];
        let mut forecaster = Forecaster::new(model).with_transformers(transformers);

        forecaster
            .fit(values)
            .map_err(|e| ForecastError::FitError(e.to_string()))?;
        forecaster
            .predict(horizon, self.confidence_level)
            .map_err(|e| ForecastError::FitError(e.to_string()))
    }

    /// Drift projection for histories too short for the library models
    ///
    /// Extends the mean step between the first and last observation, with
    /// bounds widening by the square root of the step count.
    fn forecast_with_drift(
        &self,
        values: &[f64],
        horizon: usize,
    ) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        let n = values.len();
        let last = values[n - 1];
        let slope = (values[n - 1] - values[0]) / (n as f64 - 1.0);

        let residual_var = values
            .windows(2)
            .map(|pair| {
                let residual = (pair[1] - pair[0]) - slope;
                residual * residual
            })
            .sum::<f64>()
            / (n - 1) as f64;
        let residual_std = residual_var.sqrt();

        let z = z_score(self.confidence_level);
        let mut point = Vec::with_capacity(horizon);
        let mut lower = Vec::with_capacity(horizon);
        let mut upper = Vec::with_capacity(horizon);
        for step in 1..=horizon {
            let yhat = last + slope * step as f64;
            let margin = z * residual_std * (step as f64).sqrt();
            point.push(yhat);
            lower.push(yhat - margin);
            upper.push(yhat + margin);
        }

        (point, lower, upper)
    }

    /// Split a library forecast into point and bound vectors
    ///
    /// When the model returns no intervals, bounds fall back to the point
    /// forecast plus/minus a fixed fraction of its magnitude.
    fn split_forecast(
        &self,
        forecast: augurs::Forecast,
        horizon: usize,
    ) -> Result<(Vec<f64>, Vec<f64>, Vec<f64>)> {
        if forecast.point.len() < horizon {
            return Err(ForecastError::FitError(format!(
                "Model returned {} of {} requested periods",
                forecast.point.len(),
                horizon
            )));
        }

        let point: Vec<f64> = forecast.point[..horizon].to_vec();
        match forecast.intervals {
            Some(intervals) if intervals.lower.len() >= horizon && intervals.upper.len() >= horizon => {
                Ok((
                    point,
                    intervals.lower[..horizon].to_vec(),
                    intervals.upper[..horizon].to_vec(),
                ))
            }
            _ => {
                let lower = point
                    .iter()
                    .map(|p| p - p.abs() * FALLBACK_INTERVAL_FRACTION)
                    .collect();
                let upper = point
                    .iter()
                    .map(|p| p + p.abs() * FALLBACK_INTERVAL_FRACTION)
                    .collect();
                Ok((point, lower, upper))
            }
        }
    }
}

/// Standard-normal quantile for the common confidence levels
fn z_score(confidence_level: f64) -> f64 {
    match confidence_level {
        c if c >= 0.99 => 2.576,
        c if c >= 0.95 => 1.96,
        c if c >= 0.90 => 1.645,
        _ => 1.0,
    }
}
