//! Command-line interface for pedon.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Pedon - serves pre-trained soil chemistry regression models over HTTP.
#[derive(Parser)]
#[command(name = "pedon")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "PEDON_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "PEDON_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Start the prediction server
    Serve {
        /// Bind address for the prediction API
        #[arg(long, default_value = "0.0.0.0:8000")]
        bind_addr: String,

        /// Bind address for the metrics server
        #[arg(long, default_value = "0.0.0.0:9090")]
        metrics_addr: String,

        /// Directory holding the model artifacts
        #[arg(long, env = "PEDON_MODEL_DIR", default_value = "/var/lib/pedon/models")]
        model_dir: PathBuf,

        /// Disable the metrics server
        #[arg(long)]
        no_metrics: bool,
    },

    /// Verify that every model artifact loads
    Check {
        /// Directory holding the model artifacts
        #[arg(long, env = "PEDON_MODEL_DIR", default_value = "/var/lib/pedon/models")]
        model_dir: PathBuf,
    },

    /// Show version information
    Version,
}
