//! On-disk artifact storage layout.
//!
//! One artifact file exists per (soil type, target) pair under a single
//! base directory. File names encode the algorithm family the training
//! pipeline selected for that pair, e.g.
//! `RandomForestRegressor_clay_lab_pH.json`. The encoding is a storage
//! convention shared with the training side; nothing at serving time
//! branches on it.

use super::artifact::RegressionArtifact;
use crate::error::{PedonError, Result};
use crate::types::{SoilType, TargetProperty};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Algorithm family the training pipeline selected for each pair.
fn algorithm_family(soil_type: SoilType, target: TargetProperty) -> &'static str {
    use SoilType::*;
    use TargetProperty::*;

    match (soil_type, target) {
        (Clay, Ph) => "RandomForestRegressor",
        (Clay, Nitrogen) => "GradientBoostingRegressor",
        (Clay, Phosphorus) => "LinearRegression",
        (Clay, Potassium) => "RandomForestRegressor",
        (Clay, Conductivity) => "GradientBoostingRegressor",
        (Sand, Ph) => "RandomForestRegressor",
        (Sand, Nitrogen) => "GradientBoostingRegressor",
        (Sand, Phosphorus) => "GradientBoostingRegressor",
        (Sand, Potassium) => "RandomForestRegressor",
        (Sand, Conductivity) => "LinearRegression",
        (Silt, Ph) => "GradientBoostingRegressor",
        (Silt, Nitrogen) => "GradientBoostingRegressor",
        (Silt, Phosphorus) => "RandomForestRegressor",
        (Silt, Potassium) => "GradientBoostingRegressor",
        (Silt, Conductivity) => "GradientBoostingRegressor",
    }
}

/// Resolves and loads model artifacts under a base directory.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    base_dir: PathBuf,
}

impl ArtifactStore {
    /// Create a store rooted at `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Base directory the store resolves under.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// File name for one (soil type, target) pair.
    pub fn file_name(soil_type: SoilType, target: TargetProperty) -> String {
        format!(
            "{}_{}_{}.json",
            algorithm_family(soil_type, target),
            soil_type.as_str(),
            target.as_str()
        )
    }

    /// Full path for one (soil type, target) pair.
    pub fn resolve(&self, soil_type: SoilType, target: TargetProperty) -> PathBuf {
        self.base_dir.join(Self::file_name(soil_type, target))
    }

    /// Load and validate the artifact for one (soil type, target) pair.
    ///
    /// Any failure (missing file, malformed JSON, wrong weight count) is
    /// wrapped with the pair and path so startup failures name exactly
    /// which artifact broke.
    pub fn load(&self, soil_type: SoilType, target: TargetProperty) -> Result<RegressionArtifact> {
        let path = self.resolve(soil_type, target);
        debug!(soil_type = %soil_type, target = %target, path = %path.display(), "loading model artifact");

        let wrap = |reason: String| PedonError::ModelLoad {
            soil_type: soil_type.as_str().to_string(),
            target: target.as_str().to_string(),
            path: path.clone(),
            reason,
        };

        let bytes = std::fs::read(&path).map_err(|e| wrap(e.to_string()))?;
        RegressionArtifact::from_json(&bytes).map_err(|e| wrap(e.to_string()))
    }
}
