//! Persistence of the trained-model artifact
//!
//! This is the single seam behind the on-disk model file. Saves are plain
//! whole-file overwrites with no locking or versioning: a retraining run
//! overlapping with a read may observe a partially written file. The
//! invocation model is periodic and non-concurrent, so the window is accepted
//! rather than guarded.

use crate::data::SalesSeries;
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Serialized training state written by the retraining job
///
/// The artifact holds the canonical training series rather than opaque fitted
/// state: the library's fitted models are not serializable and refitting is
/// cheap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// When the artifact was produced
    pub trained_at: DateTime<Utc>,
    /// Canonical series the model was trained on
    pub series: SalesSeries,
}

impl ModelArtifact {
    /// Create an artifact stamped with the current time
    pub fn new(series: SalesSeries) -> Self {
        Self {
            trained_at: Utc::now(),
            series,
        }
    }
}

/// Reader/writer for the single model-artifact file
#[derive(Debug, Clone)]
pub struct ModelStore {
    path: PathBuf,
}

impl ModelStore {
    /// Create a store over the given artifact path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the artifact path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the artifact, replacing any previous one unconditionally
    pub fn save(&self, artifact: &ModelArtifact) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(artifact)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Read the artifact; a missing file is not an error
    pub fn load(&self) -> Result<Option<ModelArtifact>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&self.path)?;
        let artifact = serde_json::from_str(&json)?;
        Ok(Some(artifact))
    }
}
