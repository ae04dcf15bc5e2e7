use anyhow::Result;
use language_icons::{config::Config, generator};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("language_icons=info".parse()?),
        )
        .init();

    info!("Starting language icon generation");

    let config = Config::from_env()?;

    match generator::run(&config).await {
        Ok(report) if report.is_success() => {
            info!("Icons are generated!");
            Ok(())
        }
        Ok(report) => {
            for failure in &report.failures {
                error!("{}: {}", failure.code, failure.error);
            }
            error!("{} icons could not be written", report.failures.len());
            std::process::exit(1);
        }
        Err(e) => {
            error!("Icon generation failed: {:#}", e);
            std::process::exit(1);
        }
    }
}
