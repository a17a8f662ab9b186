//! Open-Meteo API client
//!
//! Fetches the general forecast and marine forecast documents for a
//! coordinate pair and parses them into strongly-shaped raw responses. The
//! two calls are independent; normalization into domain snapshots happens in
//! [`super::normalize`].

use std::fmt;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

/// Base URL for the Open-Meteo general forecast API
const WEATHER_BASE_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Base URL for the Open-Meteo marine forecast API
const MARINE_BASE_URL: &str = "https://marine-api.open-meteo.com/v1/marine";

/// Timezone requested from both endpoints
const DEFAULT_TIMEZONE: &str = "America/New_York";

/// Forecast window for the general weather endpoint
const WEATHER_FORECAST_DAYS: u8 = 5;

/// Forecast window for the marine endpoint
const MARINE_FORECAST_DAYS: u8 = 3;

/// Upper bound on any single upstream request; a hang past this is treated
/// the same as a network failure.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Which of the two upstream calls an error came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Weather,
    Marine,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Weather => write!(f, "weather"),
            Endpoint::Marine => write!(f, "marine"),
        }
    }
}

/// Errors that can occur when fetching forecast data
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Network failure or timeout before a response arrived
    #[error("{endpoint} request failed: {source}")]
    Transport {
        endpoint: Endpoint,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-success status
    #[error("{endpoint} endpoint returned {status}")]
    Status {
        endpoint: Endpoint,
        status: StatusCode,
    },

    /// The response body did not match the expected shape
    #[error("failed to parse {endpoint} response: {source}")]
    Parse {
        endpoint: Endpoint,
        #[source]
        source: serde_json::Error,
    },
}

impl UpstreamError {
    /// The upstream call this error came from
    pub fn endpoint(&self) -> Endpoint {
        match self {
            UpstreamError::Transport { endpoint, .. }
            | UpstreamError::Status { endpoint, .. }
            | UpstreamError::Parse { endpoint, .. } => *endpoint,
        }
    }
}

/// Client for both Open-Meteo forecast endpoints
///
/// Wraps a single `reqwest::Client` reused across all calls; cloning shares
/// the underlying connection pool.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: Client,
    timezone: String,
}

impl OpenMeteoClient {
    /// Create a new client with the default timezone and request timeout
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self::with_client(client))
    }

    /// Create a client around an existing HTTP client
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }

    /// Override the timezone requested from both endpoints
    #[allow(dead_code)]
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    /// Fetch the general weather forecast for the given coordinates
    ///
    /// Requests current temperature, weather code, wind speed, and humidity
    /// plus a 5-day daily forecast, in Fahrenheit and mph.
    pub async fn fetch_weather(&self, lat: f64, lon: f64) -> Result<WeatherResponse, UpstreamError> {
        let url = self.weather_url(lat, lon);
        self.fetch(Endpoint::Weather, &url).await
    }

    /// Fetch the marine forecast for the given coordinates
    ///
    /// Requests current wave height/period/direction, a 3-day daily outlook,
    /// and the hourly wave and sea-surface-temperature series.
    pub async fn fetch_marine(&self, lat: f64, lon: f64) -> Result<MarineResponse, UpstreamError> {
        let url = self.marine_url(lat, lon);
        self.fetch(Endpoint::Marine, &url).await
    }

    fn weather_url(&self, lat: f64, lon: f64) -> String {
        format!(
            "{}?latitude={}&longitude={}\
             &daily=temperature_2m_max,temperature_2m_min,weather_code\
             &current=temperature_2m,weather_code,wind_speed_10m,relative_humidity_2m\
             &temperature_unit=fahrenheit&wind_speed_unit=mph\
             &timezone={}&forecast_days={}",
            WEATHER_BASE_URL, lat, lon, self.timezone, WEATHER_FORECAST_DAYS
        )
    }

    fn marine_url(&self, lat: f64, lon: f64) -> String {
        format!(
            "{}?latitude={}&longitude={}\
             &current=wave_height,wave_period,wave_direction\
             &daily=wave_height_max,wave_period_max,wave_direction_dominant\
             &hourly=wave_height,wave_period,wave_direction,sea_surface_temperature\
             &temperature_unit=fahrenheit\
             &timezone={}&forecast_days={}",
            MARINE_BASE_URL, lat, lon, self.timezone, MARINE_FORECAST_DAYS
        )
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        url: &str,
    ) -> Result<T, UpstreamError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| UpstreamError::Transport { endpoint, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status { endpoint, status });
        }

        let body = response
            .text()
            .await
            .map_err(|source| UpstreamError::Transport { endpoint, source })?;

        serde_json::from_str(&body).map_err(|source| UpstreamError::Parse { endpoint, source })
    }
}

// --- Raw response shapes (general forecast) ---

/// General forecast response from Open-Meteo
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherResponse {
    pub current: CurrentWeather,
    pub daily: DailyWeatherSeries,
}

/// Current conditions block of the general forecast
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeather {
    pub temperature_2m: f64,
    pub weather_code: i32,
    pub wind_speed_10m: f64,
    pub relative_humidity_2m: f64,
}

/// Daily series of the general forecast, positionally aligned by index
#[derive(Debug, Clone, Deserialize)]
pub struct DailyWeatherSeries {
    pub time: Vec<String>,
    pub temperature_2m_max: Vec<f64>,
    pub temperature_2m_min: Vec<f64>,
    pub weather_code: Vec<i32>,
}

// --- Raw response shapes (marine forecast) ---

/// Marine forecast response from Open-Meteo
#[derive(Debug, Clone, Deserialize)]
pub struct MarineResponse {
    pub current: CurrentMarine,
    pub daily: DailyMarineSeries,
    pub hourly: HourlyMarineSeries,
}

/// Current conditions block of the marine forecast
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentMarine {
    pub wave_height: f64,
    pub wave_period: f64,
    pub wave_direction: f64,
}

/// Daily series of the marine forecast, positionally aligned by index
#[derive(Debug, Clone, Deserialize)]
pub struct DailyMarineSeries {
    pub time: Vec<String>,
    pub wave_height_max: Vec<f64>,
    pub wave_period_max: Vec<f64>,
    pub wave_direction_dominant: Vec<f64>,
}

/// Hourly series of the marine forecast
///
/// Individual readings can be null upstream; entries are kept as `None`
/// rather than dropped so the series stays aligned with its time axis.
#[derive(Debug, Clone, Deserialize)]
pub struct HourlyMarineSeries {
    pub time: Vec<String>,
    pub wave_height: Vec<Option<f64>>,
    pub wave_period: Vec<Option<f64>>,
    pub wave_direction: Vec<Option<f64>>,
    pub sea_surface_temperature: Vec<Option<f64>>,
}
