//! Background forecast refresh
//!
//! Drives the fetch-normalize-store pipeline for every configured beach on a
//! fixed interval. Each cycle walks the beaches sequentially; a beach whose
//! upstream calls fail is logged and skipped, leaving its previously cached
//! data in place, and the cycle-wide refresh timestamp is stamped after every
//! beach has been attempted. Cycles run to completion inside a single loop,
//! so two cycles can never be in flight at once.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::time::MissedTickBehavior;

use crate::cache::{BeachReport, ForecastCache};
use crate::data::{all_beaches, normalize, Beach, OpenMeteoClient, UpstreamError};

/// Default delay between refresh cycles (5 minutes)
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(300);

/// Cumulative fetch counters across all refresh cycles
#[derive(Debug, Default)]
pub struct RefreshMetrics {
    fetch_count: AtomicU64,
    fetch_errors: AtomicU64,
}

impl RefreshMetrics {
    pub fn record_success(&self) {
        self.fetch_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.fetch_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Beaches fetched successfully since startup
    pub fn fetch_count(&self) -> u64 {
        self.fetch_count.load(Ordering::Relaxed)
    }

    /// Per-beach refresh failures since startup
    pub fn fetch_errors(&self) -> u64 {
        self.fetch_errors.load(Ordering::Relaxed)
    }
}

/// Result of one refresh cycle
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CycleOutcome {
    pub succeeded: usize,
    pub failed: usize,
}

/// Fetches and normalizes both forecasts for one beach
///
/// The weather and marine calls are independent upstream requests, but a
/// failure in either aborts this beach's refresh as a whole.
pub async fn refresh_beach(
    client: &OpenMeteoClient,
    beach: &Beach,
) -> Result<BeachReport, UpstreamError> {
    let weather_raw = client
        .fetch_weather(beach.weather_lat, beach.weather_lon)
        .await?;
    let marine_raw = client.fetch_marine(beach.latitude, beach.longitude).await?;

    Ok(BeachReport {
        weather: normalize::weather_snapshot(&weather_raw),
        surf: normalize::surf_snapshot(&marine_raw),
    })
}

/// Runs one refresh cycle over every configured beach
///
/// Failures are contained per beach: the cycle always continues to the next
/// beach and stamps the shared refresh timestamp at the end regardless of how
/// many beaches succeeded.
pub async fn refresh_all(
    client: &OpenMeteoClient,
    cache: &ForecastCache,
    metrics: &RefreshMetrics,
) -> CycleOutcome {
    let mut outcome = CycleOutcome::default();

    for beach in all_beaches() {
        match refresh_beach(client, beach).await {
            Ok(report) => {
                tracing::info!(
                    beach = beach.slug,
                    temp_f = report.weather.current_temp_f,
                    condition = %report.weather.condition,
                    wave_ft = report.surf.wave_height_ft,
                    rating = %report.surf.surf_rating,
                    score = report.surf.quality_score,
                    "beach forecast updated"
                );
                cache.insert(beach.slug, report);
                metrics.record_success();
                outcome.succeeded += 1;
            }
            Err(err) => {
                metrics.record_failure();
                outcome.failed += 1;
                tracing::warn!(
                    beach = beach.slug,
                    endpoint = %err.endpoint(),
                    error = %err,
                    "refresh failed, keeping previously cached data"
                );
            }
        }
    }

    cache.mark_refreshed();
    tracing::info!(
        succeeded = outcome.succeeded,
        failed = outcome.failed,
        total_fetches = metrics.fetch_count(),
        total_errors = metrics.fetch_errors(),
        "refresh cycle complete"
    );
    outcome
}

/// Periodic refresh loop, intended to run as a dedicated task
///
/// Sleeps for the interval, then runs one cycle to completion before sleeping
/// again; a cycle that outlasts the interval delays the next tick instead of
/// overlapping it. The warm-up cycle is expected to have run already, so the
/// immediate first tick is skipped.
pub async fn run(
    client: OpenMeteoClient,
    cache: Arc<ForecastCache>,
    metrics: Arc<RefreshMetrics>,
    period: Duration,
) {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // First tick fires immediately; the warm-up already covered it
    interval.tick().await;

    loop {
        interval.tick().await;
        refresh_all(&client, &cache, &metrics).await;
    }
}
