//! surfcast - Surf forecast API server for North Carolina beaches
//!
//! Warms the in-memory forecast cache with an initial refresh, spawns the
//! periodic refresh loop, and serves cached snapshots over HTTP.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use surfcast::cache::ForecastCache;
use surfcast::cli::{Cli, StartupConfig};
use surfcast::data::OpenMeteoClient;
use surfcast::refresh::{self, RefreshMetrics};
use surfcast::server::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = StartupConfig::from_cli(&cli)?;

    let cache = Arc::new(ForecastCache::new());
    let metrics = Arc::new(RefreshMetrics::default());
    let client = OpenMeteoClient::new()?;

    // Warm the cache before accepting read traffic
    let outcome = refresh::refresh_all(&client, &cache, &metrics).await;
    tracing::info!(
        succeeded = outcome.succeeded,
        failed = outcome.failed,
        interval_secs = config.refresh_interval.as_secs(),
        "initial refresh complete, forecast data refreshes on a fixed interval"
    );

    tokio::spawn(refresh::run(
        client,
        Arc::clone(&cache),
        Arc::clone(&metrics),
        config.refresh_interval,
    ));

    server::run(config.port, AppState { cache }).await
}
