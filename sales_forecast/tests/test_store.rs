use chrono::NaiveDate;
use sales_forecast::{ModelArtifact, ModelStore, Observation, SalesSeries};
use tempfile::tempdir;

fn sample_series(values: &[f64]) -> SalesSeries {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let observations = values
        .iter()
        .enumerate()
        .map(|(i, &y)| Observation {
            ds: start + chrono::Duration::days(i as i64),
            y,
        })
        .collect();
    SalesSeries::new(observations)
}

#[test]
fn test_load_missing_artifact_is_none() {
    let dir = tempdir().unwrap();
    let store = ModelStore::new(dir.path().join("model.json"));

    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn test_save_load_round_trip() {
    let dir = tempdir().unwrap();
    let store = ModelStore::new(dir.path().join("model.json"));

    let artifact = ModelArtifact::new(sample_series(&[100.0, 120.0, 130.0]));
    store.save(&artifact).unwrap();

    let loaded = store.load().unwrap().unwrap();
    assert_eq!(loaded, artifact);
}

#[test]
fn test_save_overwrites_previous_artifact() {
    let dir = tempdir().unwrap();
    let store = ModelStore::new(dir.path().join("model.json"));

    store
        .save(&ModelArtifact::new(sample_series(&[1.0, 2.0])))
        .unwrap();
    let replacement = ModelArtifact::new(sample_series(&[10.0, 20.0, 30.0]));
    store.save(&replacement).unwrap();

    let loaded = store.load().unwrap().unwrap();
    assert_eq!(loaded.series.len(), 3);
    assert_eq!(loaded, replacement);
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = tempdir().unwrap();
    let store = ModelStore::new(dir.path().join("nested").join("model.json"));

    store
        .save(&ModelArtifact::new(sample_series(&[5.0, 6.0])))
        .unwrap();

    assert!(store.path().exists());
}

#[test]
fn test_loaded_series_stays_sorted() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("model.json");

    // Artifact written with observations out of order on disk
    let json = r#"{
        "trained_at": "2024-06-01T00:00:00Z",
        "series": [
            {"ds": "2024-01-03", "y": 130.0},
            {"ds": "2024-01-01", "y": 100.0},
            {"ds": "2024-01-02", "y": 120.0}
        ]
    }"#;
    std::fs::write(&path, json).unwrap();

    let loaded = ModelStore::new(path).load().unwrap().unwrap();
    assert_eq!(loaded.series.values(), vec![100.0, 120.0, 130.0]);
}
