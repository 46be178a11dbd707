use sales_forecast::response::to_records;
use sales_forecast::{DataLoader, SalesForecaster};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Sales Forecast: CSV to Forecast Example");
    println!("=======================================\n");

    // Build a small dataset with an upward trend and a weekend bump
    println!("Building sample data...");
    let csv = build_sample_csv(60);
    let series = DataLoader::from_csv_str(&csv)?;
    println!("Normalized {} observations\n", series.len());

    // Fit and forecast two weeks ahead
    println!("Fitting model and forecasting 14 days...");
    let forecaster = SalesForecaster::default();
    let points = forecaster.fit_predict(&series, 14)?;

    println!("\nForecast:");
    for record in to_records(&points) {
        println!(
            "  {}: {:>8.2}  [{:>8.2}, {:>8.2}]",
            record.ds, record.yhat, record.yhat_lower, record.yhat_upper
        );
    }

    println!("\nForecasting complete!");

    Ok(())
}

/// Create `days` days of synthetic daily sales starting 2024-01-01
fn build_sample_csv(days: usize) -> String {
    let mut csv = String::from("date,sales\n");
    let start = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    for i in 0..days {
        let date = start + chrono::Duration::days(i as i64);
        let weekday = chrono::Datelike::weekday(&date).num_days_from_monday() as f64;
        let weekend_bump = if weekday >= 5.0 { 40.0 } else { 0.0 };
        let value = 200.0 + 0.8 * i as f64 + weekend_bump + 5.0 * (i as f64 * 0.7).sin();
        csv.push_str(&format!("{},{:.2}\n", date.format("%Y-%m-%d"), value));
    }

    csv
}
