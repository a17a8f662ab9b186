//! Concurrent-read forecast cache
//!
//! Maps beach slugs to their latest normalized snapshot pair. The weather and
//! surf snapshots for a beach are published together behind one `Arc`, so a
//! reader can never observe a half-updated pair: the write path swaps the
//! whole entry and readers clone the `Arc` out without holding a lock across
//! use. The cache starts empty, is rebuilt from scratch on every process
//! start, and a failed refresh never evicts previously stored data.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::data::{all_beaches, BeachSummary, SurfSnapshot, WeatherSnapshot};

/// The snapshot pair stored per beach, replaced as a single unit
#[derive(Debug, Clone, PartialEq)]
pub struct BeachReport {
    pub weather: WeatherSnapshot,
    pub surf: SurfSnapshot,
}

/// Shared cache of normalized forecasts for all configured beaches
#[derive(Debug, Default)]
pub struct ForecastCache {
    entries: RwLock<HashMap<String, Arc<BeachReport>>>,
    /// Stamped once per refresh cycle, shared across all beaches
    last_refreshed: RwLock<Option<DateTime<Utc>>>,
}

impl ForecastCache {
    /// Creates an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached report for a slug
    ///
    /// `None` covers both unknown slugs and configured beaches that no
    /// refresh has populated yet; the read path does not distinguish them.
    pub fn get(&self, slug: &str) -> Option<Arc<BeachReport>> {
        self.entries.read().get(slug).cloned()
    }

    /// Replaces the stored report for a slug as one atomic publish
    pub fn insert(&self, slug: &str, report: BeachReport) {
        self.entries.write().insert(slug.to_string(), Arc::new(report));
    }

    /// When the last refresh cycle finished, if any has
    pub fn last_refreshed(&self) -> Option<DateTime<Utc>> {
        *self.last_refreshed.read()
    }

    /// Stamps the cycle-wide refresh timestamp
    pub fn mark_refreshed(&self) {
        *self.last_refreshed.write() = Some(Utc::now());
    }

    /// Number of beaches with cached data
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// One summary per configured beach, in configuration order
    ///
    /// Beaches without cached surf data get a placeholder entry (score 0,
    /// rating "Unknown", red band) rather than being dropped, so the list
    /// length and order never vary.
    pub fn summaries(&self) -> Vec<BeachSummary> {
        let entries = self.entries.read();
        all_beaches()
            .iter()
            .map(|beach| match entries.get(beach.slug) {
                Some(report) => BeachSummary {
                    slug: beach.slug.to_string(),
                    name: beach.name.to_string(),
                    weather_city: beach.weather_city.to_string(),
                    quality_score: report.surf.quality_score,
                    surf_rating: report.surf.surf_rating.clone(),
                    wave_height_ft: report.surf.wave_height_ft,
                    rating_color: rating_color(report.surf.quality_score).to_string(),
                },
                None => BeachSummary {
                    slug: beach.slug.to_string(),
                    name: beach.name.to_string(),
                    weather_city: beach.weather_city.to_string(),
                    quality_score: 0,
                    surf_rating: "Unknown".to_string(),
                    wave_height_ft: 0.0,
                    rating_color: "red".to_string(),
                },
            })
            .collect()
    }
}

/// Traffic-light band for a quality score
fn rating_color(score: u8) -> &'static str {
    if score >= 55 {
        "green"
    } else if score >= 25 {
        "yellow"
    } else {
        "red"
    }
}
