//! Pedon CLI - Main entry point.

use pedon::cli::{Cli, Commands};
use pedon::config::PedonConfig;
use pedon::model::ArtifactStore;
use pedon::types::{SoilType, TargetProperty};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Commands::Serve {
            bind_addr,
            metrics_addr,
            model_dir,
            no_metrics,
        } => {
            // Build configuration from file and CLI args
            let mut config = match cli.config {
                Some(path) => PedonConfig::from_file(&path)?,
                None => PedonConfig::default(),
            };
            config.server.bind_addr = bind_addr.parse()?;
            config.observability.metrics_addr = metrics_addr.parse()?;
            config.models.dir = model_dir;
            config.observability.log_level = cli.log_level;
            if no_metrics {
                config.observability.metrics_enabled = false;
            }
            config.validate()?;

            // Run the server
            pedon::run(config).await?;
        }

        Commands::Check { model_dir } => {
            let store = ArtifactStore::new(&model_dir);
            let mut failures = 0;

            println!("Checking model artifacts in {:?}", model_dir);
            for soil_type in SoilType::ALL {
                for target in TargetProperty::ALL {
                    match store.load(soil_type, target) {
                        Ok(artifact) => {
                            println!(
                                "  OK    {}/{} ({})",
                                soil_type, target, artifact.algorithm
                            );
                        }
                        Err(e) => {
                            println!("  FAIL  {}/{}: {}", soil_type, target, e);
                            failures += 1;
                        }
                    }
                }
            }

            if failures > 0 {
                eprintln!("{} artifact(s) failed to load", failures);
                std::process::exit(1);
            }
            println!("All artifacts loaded");
        }

        Commands::Version => {
            println!("pedon v{}", env!("CARGO_PKG_VERSION"));
            println!("Serves pre-trained soil chemistry regression models over HTTP");
        }
    }

    Ok(())
}
