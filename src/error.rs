//! Error types for the pedon prediction service.
//!
//! All fallible operations return [`Result`], built on the unified
//! [`PedonError`] enum. Two failure kinds carry the service's contract:
//!
//! - [`PedonError::ModelLoad`] — a model artifact failed to load during
//!   registry construction. Fatal: the process refuses to start serving
//!   with a partially populated registry.
//! - [`PedonError::InvalidInput`] — the caller supplied something outside
//!   the typed domain (an unrecognized soil type). Surfaced as HTTP 400.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for pedon operations.
#[derive(Error, Debug)]
pub enum PedonError {
    // Startup errors
    #[error("failed to load model for {soil_type}/{target} from {path}: {reason}")]
    ModelLoad {
        soil_type: String,
        target: String,
        path: PathBuf,
        reason: String,
    },

    // Request errors
    #[error("invalid input: {0}")]
    InvalidInput(String),

    // Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid configuration: {field}: {reason}")]
    InvalidConfig { field: String, reason: String },

    // Serialization errors
    #[error("serialization error: {0}")]
    Serialization(String),

    // External errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("network error: {0}")]
    Network(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl PedonError {
    /// Check whether the error is the caller's fault rather than ours.
    /// Client errors map to HTTP 4xx, everything else to 5xx.
    pub fn is_client_error(&self) -> bool {
        matches!(self, PedonError::InvalidInput(_))
    }
}

impl From<serde_json::Error> for PedonError {
    fn from(e: serde_json::Error) -> Self {
        PedonError::Serialization(e.to_string())
    }
}

/// Result type alias for pedon operations.
pub type Result<T> = std::result::Result<T, PedonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_classification() {
        assert!(PedonError::InvalidInput("loam".into()).is_client_error());
        assert!(!PedonError::Internal("boom".into()).is_client_error());
        assert!(!PedonError::ModelLoad {
            soil_type: "clay".into(),
            target: "lab_pH".into(),
            path: PathBuf::from("/data/models/x.json"),
            reason: "missing".into(),
        }
        .is_client_error());
    }

    #[test]
    fn test_model_load_display_carries_context() {
        let err = PedonError::ModelLoad {
            soil_type: "sand".into(),
            target: "lab_EC".into(),
            path: PathBuf::from("/data/models/LinearRegression_sand_lab_EC.json"),
            reason: "no such file".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("sand"));
        assert!(msg.contains("lab_EC"));
        assert!(msg.contains("LinearRegression_sand_lab_EC.json"));
    }
}
