//! Serialized model artifacts.
//!
//! An artifact is the serving-side representation of one pre-trained
//! regressor: a JSON document carrying an algorithm label, one weight per
//! sensor feature, and an intercept. The algorithm label mirrors the
//! training pipeline's file naming and carries no runtime meaning.

use super::Regressor;
use crate::error::{PedonError, Result};
use crate::types::{FeatureVector, FEATURE_COUNT};
use serde::{Deserialize, Serialize};

/// A pre-trained regression model in its serialized form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionArtifact {
    /// Algorithm family the model was trained with. Storage metadata only.
    pub algorithm: String,
    /// One weight per feature, in feature-vector order.
    pub weights: Vec<f64>,
    /// Additive intercept term.
    pub intercept: f64,
}

impl RegressionArtifact {
    /// Parse an artifact from raw JSON bytes and validate its shape.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let artifact: RegressionArtifact = serde_json::from_slice(bytes)?;
        artifact.validate()?;
        Ok(artifact)
    }

    /// Validate that the artifact matches the fixed feature contract.
    pub fn validate(&self) -> Result<()> {
        if self.weights.len() != FEATURE_COUNT {
            return Err(PedonError::Serialization(format!(
                "artifact has {} weights, expected {}",
                self.weights.len(),
                FEATURE_COUNT
            )));
        }
        Ok(())
    }
}

impl Regressor for RegressionArtifact {
    fn predict(&self, features: &FeatureVector) -> f64 {
        let inputs = features.as_array();
        self.weights
            .iter()
            .zip(inputs.iter())
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept
    }
}
