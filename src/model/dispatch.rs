//! Prediction dispatch.
//!
//! Fans one feature vector out to every target model for a soil type and
//! assembles the per-target predictions in the fixed enumeration order.

use super::registry::ModelRegistry;
use crate::error::{PedonError, Result};
use crate::types::{FeatureVector, SoilType, TargetProperty};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::sync::Arc;
use tracing::debug;

/// One prediction per target property, in enumeration order.
///
/// Serializes as a JSON object keyed by target name, e.g.
/// `{"lab_pH": 6.4, "lab_N": 11.8, ...}`. By construction the entry set is
/// exactly the registry's target set; there are no partial results.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionSet {
    entries: Vec<(TargetProperty, f64)>,
}

impl PredictionSet {
    fn new(entries: Vec<(TargetProperty, f64)>) -> Self {
        Self { entries }
    }

    /// Predicted value for one target.
    pub fn get(&self, target: TargetProperty) -> Option<f64> {
        self.entries
            .iter()
            .find(|(t, _)| *t == target)
            .map(|(_, v)| *v)
    }

    /// Entries in response order.
    pub fn iter(&self) -> impl Iterator<Item = (TargetProperty, f64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for PredictionSet {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (target, value) in &self.entries {
            map.serialize_entry(target.as_str(), value)?;
        }
        map.end()
    }
}

/// Stateless dispatcher over an immutable registry.
pub struct PredictionDispatcher {
    registry: Arc<ModelRegistry>,
}

impl PredictionDispatcher {
    pub fn new(registry: Arc<ModelRegistry>) -> Self {
        Self { registry }
    }

    /// Registry the dispatcher serves from.
    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    /// Predict every target property for one sensor reading.
    ///
    /// The soil type string is validated before any model is invoked; an
    /// unrecognized value returns [`PedonError::InvalidInput`] with zero
    /// invocations. On success the result holds exactly one entry per
    /// target, computed from the same feature vector.
    pub fn predict(&self, soil_type: &str, features: &FeatureVector) -> Result<PredictionSet> {
        let soil_type: SoilType = soil_type.parse()?;

        let models = self.registry.models_for(soil_type).ok_or_else(|| {
            PedonError::Internal(format!("registry has no models for {}", soil_type))
        })?;

        let mut entries = Vec::with_capacity(TargetProperty::ALL.len());
        for target in TargetProperty::ALL {
            let model = models.get(&target).ok_or_else(|| {
                PedonError::Internal(format!("registry has no {}/{} model", soil_type, target))
            })?;
            entries.push((target, model.predict(features)));
        }

        debug!(soil_type = %soil_type, targets = entries.len(), "prediction dispatched");
        Ok(PredictionSet::new(entries))
    }
}
