//! Model registry.
//!
//! The registry holds one loaded model per (soil type, target) pair.
//! Construction is eager and total: every pair in the fixed enumerations
//! must load, or construction fails and the process never starts serving.
//! Once built the registry is immutable, so request handlers share it
//! behind an `Arc` with no locking.

use super::store::ArtifactStore;
use super::BoxedRegressor;
use crate::error::Result;
use crate::types::{SoilType, TargetProperty};
use std::collections::HashMap;
use tracing::info;

/// Fully populated two-level mapping from soil type and target to a loaded
/// model. Read-only after construction; there is no reload.
pub struct ModelRegistry {
    models: HashMap<SoilType, HashMap<TargetProperty, BoxedRegressor>>,
}

impl ModelRegistry {
    /// Load every model artifact from the store.
    ///
    /// Fails on the first artifact that does not load; partial availability
    /// is not an accepted degraded mode.
    pub fn load(store: &ArtifactStore) -> Result<Self> {
        let mut models = HashMap::new();

        for soil_type in SoilType::ALL {
            let mut per_target: HashMap<TargetProperty, BoxedRegressor> = HashMap::new();
            for target in TargetProperty::ALL {
                let artifact = store.load(soil_type, target)?;
                per_target.insert(target, Box::new(artifact));
            }
            models.insert(soil_type, per_target);
        }

        let registry = Self { models };
        info!(
            models = registry.model_count(),
            dir = %store.base_dir().display(),
            "model registry loaded"
        );
        Ok(registry)
    }

    /// Build a registry from a closure producing one model per pair.
    ///
    /// Every pair in the fixed enumerations is populated, so the resulting
    /// registry satisfies the same totality invariant as [`load`].
    /// Intended for tests substituting stub models.
    ///
    /// [`load`]: ModelRegistry::load
    pub fn from_loader<F>(mut loader: F) -> Self
    where
        F: FnMut(SoilType, TargetProperty) -> BoxedRegressor,
    {
        let mut models = HashMap::new();
        for soil_type in SoilType::ALL {
            let per_target = TargetProperty::ALL
                .into_iter()
                .map(|target| (target, loader(soil_type, target)))
                .collect();
            models.insert(soil_type, per_target);
        }
        Self { models }
    }

    /// Whether the registry has models for the given soil type.
    pub fn supports(&self, soil_type: SoilType) -> bool {
        self.models.contains_key(&soil_type)
    }

    /// The per-target models for one soil type.
    pub fn models_for(
        &self,
        soil_type: SoilType,
    ) -> Option<&HashMap<TargetProperty, BoxedRegressor>> {
        self.models.get(&soil_type)
    }

    /// Total number of loaded models.
    pub fn model_count(&self) -> usize {
        self.models.values().map(|m| m.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::artifact::RegressionArtifact;
    use crate::model::Regressor;
    use crate::types::FeatureVector;

    struct ConstantModel(f64);

    impl Regressor for ConstantModel {
        fn predict(&self, _features: &FeatureVector) -> f64 {
            self.0
        }
    }

    fn write_artifact(store: &ArtifactStore, soil_type: SoilType, target: TargetProperty) {
        let artifact = RegressionArtifact {
            algorithm: "LinearRegression".to_string(),
            weights: vec![0.0; 7],
            intercept: 1.0,
        };
        std::fs::write(
            store.resolve(soil_type, target),
            serde_json::to_vec(&artifact).unwrap(),
        )
        .unwrap();
    }

    #[test]
    fn test_load_populates_every_pair() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());
        for soil_type in SoilType::ALL {
            for target in TargetProperty::ALL {
                write_artifact(&store, soil_type, target);
            }
        }

        let registry = ModelRegistry::load(&store).unwrap();
        assert_eq!(registry.model_count(), 15);
        for soil_type in SoilType::ALL {
            assert!(registry.supports(soil_type));
            assert_eq!(registry.models_for(soil_type).unwrap().len(), 5);
        }
    }

    #[test]
    fn test_load_fails_entirely_on_one_missing_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());
        // Write everything except sand/lab_P.
        for soil_type in SoilType::ALL {
            for target in TargetProperty::ALL {
                if soil_type == SoilType::Sand && target == TargetProperty::Phosphorus {
                    continue;
                }
                write_artifact(&store, soil_type, target);
            }
        }

        let err = ModelRegistry::load(&store).err().unwrap();
        let msg = err.to_string();
        assert!(msg.contains("sand"));
        assert!(msg.contains("lab_P"));
    }

    #[test]
    fn test_from_loader_is_total() {
        let registry = ModelRegistry::from_loader(|_, _| Box::new(ConstantModel(1.0)));
        assert_eq!(registry.model_count(), 15);
        assert!(registry.supports(SoilType::Silt));
    }
}
