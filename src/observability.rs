//! Observability for pedon.
//!
//! Provides logging initialization, Prometheus metrics, and the metrics
//! HTTP server.

use crate::config::ObservabilityConfig;
use crate::error::{PedonError, Result};
use metrics::{counter, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize logging.
pub fn init(config: &ObservabilityConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if config.json_logs {
        subscriber
            .with(fmt::layer().json())
            .try_init()
            .map_err(|e| PedonError::Internal(format!("failed to init logging: {}", e)))?;
    } else {
        subscriber
            .with(fmt::layer())
            .try_init()
            .map_err(|e| PedonError::Internal(format!("failed to init logging: {}", e)))?;
    }

    info!("observability initialized");
    Ok(())
}

/// Install the Prometheus recorder and register the standard metrics.
///
/// Must run before any metric is recorded; values recorded while no
/// recorder is installed are dropped.
pub fn init_metrics() -> Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| PedonError::Internal(format!("failed to install metrics recorder: {}", e)))?;

    register_metrics();
    Ok(handle)
}

/// Run the Prometheus metrics server over an installed recorder.
pub async fn run_metrics_server(
    config: ObservabilityConfig,
    handle: PrometheusHandle,
) -> Result<()> {
    let app = axum::Router::new()
        .route(
            "/metrics",
            axum::routing::get(move || async move { handle.render() }),
        )
        .route("/health", axum::routing::get(|| async { "OK" }));

    let listener = TcpListener::bind(config.metrics_addr).await?;
    info!(addr = %config.metrics_addr, "metrics server listening");

    axum::serve(listener, app)
        .await
        .map_err(|e| PedonError::Network(e.to_string()))?;

    Ok(())
}

/// Register standard metrics.
fn register_metrics() {
    gauge!("pedon_models_loaded").set(0.0);

    counter!("pedon_requests_total").absolute(0);
    counter!("pedon_predictions_total").absolute(0);
    counter!("pedon_prediction_errors_total").absolute(0);
}

/// Record the number of models held by the registry.
pub fn set_models_loaded(count: usize) {
    gauge!("pedon_models_loaded").set(count as f64);
}

/// Record an API request.
pub fn record_api_request(path: &str, status: u16) {
    counter!(
        "pedon_requests_total",
        "path" => path.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// Record a successful prediction dispatch.
pub fn record_prediction(soil_type: &str) {
    counter!("pedon_predictions_total", "soil_type" => soil_type.to_string()).increment(1);
}

/// Record a rejected prediction request.
pub fn record_prediction_error() {
    counter!("pedon_prediction_errors_total").increment(1);
}
