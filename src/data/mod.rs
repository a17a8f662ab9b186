//! Core data models for the surf forecast service
//!
//! Domain snapshot types served to clients, plus the static beach
//! configuration, the upstream Open-Meteo adapter, the raw-to-domain
//! normalizer, and the pure classification utilities they share.

pub mod beach;
pub mod conditions;
pub mod normalize;
pub mod upstream;

pub use beach::{all_beaches, beach_by_slug};
pub use upstream::{Endpoint, OpenMeteoClient, UpstreamError};

use serde::{Deserialize, Serialize};

/// A configured beach location
///
/// Uses `&'static str` for string fields to allow static initialization of
/// the BEACHES array. Carries separate coordinates for the surf break
/// (marine forecasts) and the weather-reporting city (general forecasts).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Beach {
    /// Unique identifier used in API paths
    pub slug: &'static str,
    /// Human-readable name of the beach
    pub name: &'static str,
    /// Latitude of the surf break
    pub latitude: f64,
    /// Longitude of the surf break
    pub longitude: f64,
    /// Name of the city used for weather forecasts
    pub weather_city: &'static str,
    /// Latitude of the weather observation point
    pub weather_lat: f64,
    /// Longitude of the weather observation point
    pub weather_lon: f64,
}

/// Normalized weather conditions for one beach, replaced wholesale on refresh
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    /// Current temperature in Fahrenheit, rounded to one decimal
    pub current_temp_f: f64,
    /// Current condition description (e.g., "Partly Cloudy")
    pub condition: String,
    /// Icon key for the current condition (e.g., "partly-cloudy")
    pub condition_icon: String,
    /// Current wind speed in mph, rounded to one decimal
    pub wind_mph: f64,
    /// Relative humidity percentage (0-100)
    pub humidity_pct: u8,
    /// Daily forecasts for the configured forecast window
    pub daily: Vec<DailyWeather>,
}

/// One day of the weather forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyWeather {
    /// Forecast date (ISO 8601, as reported upstream)
    pub date: String,
    /// High temperature in Fahrenheit
    pub high_f: f64,
    /// Low temperature in Fahrenheit
    pub low_f: f64,
    /// Condition description
    pub condition: String,
    /// Condition icon key
    pub condition_icon: String,
}

/// Normalized surf conditions for one beach, replaced wholesale on refresh
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfSnapshot {
    /// Sea surface temperature in Fahrenheit
    pub sea_temp_f: f64,
    /// Current wave height in feet
    pub wave_height_ft: f64,
    /// Current wave period in seconds
    pub wave_period_s: f64,
    /// 16-point compass label for the current swell direction
    pub swell_direction: String,
    /// Surf rating label derived from the quality score
    pub surf_rating: String,
    /// Surf quality score (0-100)
    pub quality_score: u8,
    /// Hour-by-hour surf timeline for the forecast window
    pub hourly: Vec<HourlySurf>,
    /// Daily surf outlook for the forecast window
    pub daily: Vec<DailySurf>,
}

/// One hour of the surf timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlySurf {
    /// Forecast hour (ISO 8601, as reported upstream)
    pub time: String,
    pub wave_height_ft: f64,
    pub wave_period_s: f64,
    pub swell_direction: String,
    pub surf_rating: String,
    pub quality_score: u8,
}

/// One day of the surf outlook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySurf {
    /// Forecast date (ISO 8601, as reported upstream)
    pub date: String,
    pub wave_height_ft: f64,
    pub wave_period_s: f64,
    pub swell_direction: String,
    pub surf_rating: String,
    pub quality_score: u8,
}

/// Condensed per-beach entry for the list endpoint
///
/// Always produced for every configured beach; beaches without cached surf
/// data get a placeholder entry rather than being omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeachSummary {
    pub slug: String,
    pub name: String,
    pub weather_city: String,
    pub quality_score: u8,
    pub surf_rating: String,
    pub wave_height_ft: f64,
    /// Traffic-light band for the score: "green", "yellow", or "red"
    pub rating_color: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_snapshot_serializes_camel_case() {
        let snapshot = WeatherSnapshot {
            current_temp_f: 72.5,
            condition: "Partly Cloudy".to_string(),
            condition_icon: "partly-cloudy".to_string(),
            wind_mph: 8.1,
            humidity_pct: 65,
            daily: vec![DailyWeather {
                date: "2025-07-15".to_string(),
                high_f: 84.2,
                low_f: 71.3,
                condition: "Clear Sky".to_string(),
                condition_icon: "clear".to_string(),
            }],
        };

        let json = serde_json::to_string(&snapshot).expect("Failed to serialize WeatherSnapshot");
        assert!(json.contains("\"currentTempF\":72.5"));
        assert!(json.contains("\"conditionIcon\":\"partly-cloudy\""));
        assert!(json.contains("\"windMph\":8.1"));
        assert!(json.contains("\"humidityPct\":65"));
        assert!(json.contains("\"highF\":84.2"));
        assert!(json.contains("\"lowF\":71.3"));
    }

    #[test]
    fn test_surf_snapshot_serializes_camel_case() {
        let snapshot = SurfSnapshot {
            sea_temp_f: 78.3,
            wave_height_ft: 2.6,
            wave_period_s: 9.0,
            swell_direction: "ESE".to_string(),
            surf_rating: "Fair".to_string(),
            quality_score: 42,
            hourly: vec![],
            daily: vec![],
        };

        let json = serde_json::to_string(&snapshot).expect("Failed to serialize SurfSnapshot");
        assert!(json.contains("\"seaTempF\":78.3"));
        assert!(json.contains("\"waveHeightFt\":2.6"));
        assert!(json.contains("\"wavePeriodS\":9.0"));
        assert!(json.contains("\"swellDirection\":\"ESE\""));
        assert!(json.contains("\"surfRating\":\"Fair\""));
        assert!(json.contains("\"qualityScore\":42"));
    }

    #[test]
    fn test_beach_summary_roundtrip() {
        let summary = BeachSummary {
            slug: "wrightsville".to_string(),
            name: "Wrightsville Beach".to_string(),
            weather_city: "Wilmington".to_string(),
            quality_score: 61,
            surf_rating: "Fair to Good".to_string(),
            wave_height_ft: 4.3,
            rating_color: "green".to_string(),
        };

        let json = serde_json::to_string(&summary).expect("Failed to serialize BeachSummary");
        assert!(json.contains("\"weatherCity\":\"Wilmington\""));
        assert!(json.contains("\"ratingColor\":\"green\""));

        let decoded: BeachSummary =
            serde_json::from_str(&json).expect("Failed to deserialize BeachSummary");
        assert_eq!(decoded, summary);
    }
}
