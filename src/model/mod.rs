//! Model loading, registry, and prediction dispatch.

pub mod artifact;
pub mod dispatch;
pub mod registry;
pub mod store;

pub use artifact::RegressionArtifact;
pub use dispatch::{PredictionDispatcher, PredictionSet};
pub use registry::ModelRegistry;
pub use store::ArtifactStore;

use crate::types::FeatureVector;

/// Capability interface for a trained regression model.
///
/// Anything that turns a feature vector into a single scalar qualifies;
/// loaded artifacts and test stubs are interchangeable behind this trait.
/// Implementations must be safe for concurrent read-only use: `predict`
/// takes `&self` and the registry is never mutated after startup.
pub trait Regressor: Send + Sync {
    /// Predict the target value for one feature vector.
    fn predict(&self, features: &FeatureVector) -> f64;
}

/// A registry-owned model object.
pub type BoxedRegressor = Box<dyn Regressor>;
