//! Pedon - an HTTP service serving pre-trained soil chemistry regression
//! models.
//!
//! A request names a soil type (clay, sand, silt) and supplies seven sensor
//! readings; the service fans the feature vector out to the five per-target
//! models loaded for that soil type and returns the predicted lab values
//! (pH, N, P, K, EC).
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │                      pedon                       │
//! ├──────────────────────────────────────────────────┤
//! │  HTTP API: / | /predict | stub training routes   │
//! ├──────────────────────────────────────────────────┤
//! │  Dispatcher: soil type validation | target fanout│
//! ├──────────────────────────────────────────────────┤
//! │  Registry: eager, total, immutable model mapping │
//! ├──────────────────────────────────────────────────┤
//! │  Artifact store: one JSON artifact per pair      │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! The registry is built once at startup and never mutated, so request
//! handlers share it without locking. If any artifact fails to load the
//! process aborts startup rather than serve a partial registry.
//!
//! # Quick Start
//!
//! ```no_run
//! use pedon::config::PedonConfig;
//!
//! #[tokio::main]
//! async fn main() -> pedon::Result<()> {
//!     let config = PedonConfig::development();
//!     pedon::run(config).await
//! }
//! ```

pub mod config;
pub mod error;
pub mod types;

pub mod cli;
pub mod http;
pub mod model;
pub mod observability;

// Re-exports
pub use error::{PedonError, Result};
pub use types::{FeatureVector, SoilType, TargetProperty, FEATURE_COUNT};

use config::PedonConfig;
use model::{ArtifactStore, ModelRegistry, PredictionDispatcher};
use std::sync::Arc;
use tracing::{error, info};

/// Run the pedon server with the given configuration.
pub async fn run(config: PedonConfig) -> Result<()> {
    // Initialize observability
    observability::init(&config.observability)?;

    // The recorder must exist before any metric is recorded, including the
    // models-loaded gauge set right after registry construction.
    let metrics_handle = if config.observability.metrics_enabled {
        Some(observability::init_metrics()?)
    } else {
        None
    };

    info!(dir = %config.models.dir.display(), "loading model registry");
    let store = ArtifactStore::new(&config.models.dir);
    let registry = match ModelRegistry::load(&store) {
        Ok(registry) => registry,
        Err(e) => {
            error!("startup aborted: {}", e);
            return Err(e);
        }
    };
    observability::set_models_loaded(registry.model_count());

    let dispatcher = Arc::new(PredictionDispatcher::new(Arc::new(registry)));

    if let Some(handle) = metrics_handle {
        info!("starting metrics server on {}", config.observability.metrics_addr);
        let obs_config = config.observability.clone();

        tokio::spawn(async move {
            if let Err(e) = observability::run_metrics_server(obs_config, handle).await {
                error!("metrics server error: {}", e);
            }
        });
    }

    http::run_api_server(config.server, dispatcher, shutdown_signal()).await?;

    info!("pedon shutdown complete");
    Ok(())
}

/// Resolve when the process receives SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("failed to install SIGINT handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => error!("failed to install SIGTERM handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
