//! Prediction API server.

use super::handlers::{add_sample, commit, predict, read_root, train};
use crate::config::ServerConfig;
use crate::error::{PedonError, Result};
use crate::model::PredictionDispatcher;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Shared state for API handlers.
#[derive(Clone)]
pub struct AppState {
    /// Dispatcher over the immutable model registry.
    pub dispatcher: Arc<PredictionDispatcher>,
}

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(read_root))
        .route("/add_sample", post(add_sample))
        .route("/train", post(train))
        .route("/commit", post(commit))
        .route("/predict", get(predict))
        .with_state(state)
}

/// Run the prediction API server until the shutdown future resolves.
pub async fn run_api_server(
    config: ServerConfig,
    dispatcher: Arc<PredictionDispatcher>,
    shutdown: impl std::future::Future<Output = ()> + Send + 'static,
) -> Result<()> {
    let app = router(AppState { dispatcher });

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "prediction API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| PedonError::Network(e.to_string()))?;

    Ok(())
}
