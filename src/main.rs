use anyhow::Result;
use clap::Parser;
use job_sweep::{run_sweep, AppConfig};
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Sweep the job search API across every category and append results to CSV.
#[derive(Parser)]
#[command(name = "clt-jobs", version, about)]
struct Cli {}

#[tokio::main]
async fn main() -> Result<()> {
    Cli::parse();

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let today = chrono::Local::now().date_naive();
    let config = AppConfig::from_env(today)?;

    info!("🌐 Using API URL: {}", config.api_url);
    info!(
        "Searching {} categories in {} ({})",
        config.categories.len(),
        config.location,
        config.recency.to_tbs()
    );

    run_sweep(&config, today).await?;
    Ok(())
}
