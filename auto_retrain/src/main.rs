//! Periodic model retraining job
//!
//! Invoked by an OS-level scheduler (cron); the process exit code is the only
//! interface. Reloads the canonical dataset, refits to validate it, and
//! overwrites the model artifact read by the serving process.

use sales_forecast::{DataLoader, ModelArtifact, ModelStore, SalesForecaster};
use std::env;
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "auto_retrain=info".into()),
        )
        .init();

    let data_path =
        env::var("SALES_DATA_PATH").unwrap_or_else(|_| "data/sales_data.csv".to_string());
    let model_path = env::var("MODEL_PATH").unwrap_or_else(|_| "data/model.json".to_string());

    match retrain(&data_path, &model_path) {
        Ok(rows) => {
            tracing::info!(rows, artifact = %model_path, "model retrained");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("retraining failed: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Load the dataset, validate it by fitting, and publish a fresh artifact
fn retrain(
    data_path: impl AsRef<Path>,
    model_path: impl AsRef<Path>,
) -> sales_forecast::Result<usize> {
    let series = DataLoader::from_csv_path(data_path)?;

    // Fit before publishing so a degenerate dataset never replaces a good artifact
    SalesForecaster::default().fit_predict(&series, 1)?;

    let rows = series.len();
    let store = ModelStore::new(model_path.as_ref());
    store.save(&ModelArtifact::new(series))?;

    Ok(rows)
}
