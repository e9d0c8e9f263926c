//! Configuration module for pedon.

use crate::error::{PedonError, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Main configuration for a pedon node.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PedonConfig {
    /// API server configuration.
    pub server: ServerConfig,
    /// Model store configuration.
    pub models: ModelStoreConfig,
    /// Observability configuration.
    pub observability: ObservabilityConfig,
}

impl PedonConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| PedonError::Config(format!("failed to read config file: {}", e)))?;

        let config: Self = serde_json::from_str(&content)
            .map_err(|e| PedonError::Config(format!("failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<()> {
        if self.models.dir.as_os_str().is_empty() {
            return Err(PedonError::InvalidConfig {
                field: "models.dir".to_string(),
                reason: "model directory must not be empty".to_string(),
            });
        }

        if self.observability.metrics_enabled
            && self.observability.metrics_addr == self.server.bind_addr
        {
            return Err(PedonError::InvalidConfig {
                field: "observability.metrics_addr".to_string(),
                reason: "metrics address must differ from the API bind address".to_string(),
            });
        }

        Ok(())
    }

    /// Create a minimal development configuration.
    pub fn development() -> Self {
        Self {
            server: ServerConfig {
                bind_addr: "127.0.0.1:8000".parse().expect("valid socket address"),
            },
            models: ModelStoreConfig {
                dir: PathBuf::from("./models"),
            },
            observability: ObservabilityConfig::default(),
        }
    }
}

/// API server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind the prediction API.
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8000".parse().expect("valid socket address"),
        }
    }
}

/// Model store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelStoreConfig {
    /// Directory holding one artifact per (soil type, target) pair.
    pub dir: PathBuf,
}

impl Default for ModelStoreConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("/var/lib/pedon/models"),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Enable Prometheus metrics.
    pub metrics_enabled: bool,
    /// Metrics bind address.
    pub metrics_addr: SocketAddr,
    /// Log level.
    pub log_level: String,
    /// Enable JSON logging.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: true,
            metrics_addr: "0.0.0.0:9090".parse().expect("valid socket address"),
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}
