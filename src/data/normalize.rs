//! Raw-to-domain forecast normalization
//!
//! Pure transformation of adapter-parsed Open-Meteo responses into the
//! snapshot types served by the API. All unit conversion, rounding, and
//! classification happens here; the upstream shapes never leak past this
//! module.
//!
//! Quality scores are always computed from the raw meter heights, before the
//! feet conversion applied for display.

use super::conditions::{describe_weather_code, direction_label, meters_to_feet, round1, surf_quality};
use super::upstream::{MarineResponse, WeatherResponse};
use super::{DailySurf, DailyWeather, HourlySurf, SurfSnapshot, WeatherSnapshot};

/// Builds a [`WeatherSnapshot`] from a raw general forecast response.
///
/// Temperatures and wind speed are rounded to one decimal; weather codes are
/// classified into description/icon pairs. The daily series length follows
/// the upstream document and is independent of the marine series.
pub fn weather_snapshot(raw: &WeatherResponse) -> WeatherSnapshot {
    let (condition, icon) = describe_weather_code(raw.current.weather_code);

    let daily = raw
        .daily
        .time
        .iter()
        .zip(&raw.daily.temperature_2m_max)
        .zip(&raw.daily.temperature_2m_min)
        .zip(&raw.daily.weather_code)
        .map(|(((date, high), low), code)| {
            let (condition, icon) = describe_weather_code(*code);
            DailyWeather {
                date: date.clone(),
                high_f: round1(*high),
                low_f: round1(*low),
                condition: condition.to_string(),
                condition_icon: icon.to_string(),
            }
        })
        .collect();

    WeatherSnapshot {
        current_temp_f: round1(raw.current.temperature_2m),
        condition: condition.to_string(),
        condition_icon: icon.to_string(),
        wind_mph: round1(raw.current.wind_speed_10m),
        humidity_pct: raw.current.relative_humidity_2m as u8,
        daily,
    }
}

/// Builds a [`SurfSnapshot`] from a raw marine forecast response.
///
/// Wave heights are converted from meters to feet; hourly readings that are
/// null upstream are scored as 0 but kept in sequence so the timeline stays
/// aligned. Sea surface temperature is the most recent non-null hourly value,
/// or 0 when the whole series is missing.
pub fn surf_snapshot(raw: &MarineResponse) -> SurfSnapshot {
    let sea_temp_f = raw
        .hourly
        .sea_surface_temperature
        .iter()
        .rev()
        .find_map(|reading| *reading)
        .unwrap_or(0.0);

    let (rating, score) = surf_quality(raw.current.wave_height, raw.current.wave_period);

    let hourly = raw
        .hourly
        .time
        .iter()
        .zip(&raw.hourly.wave_height)
        .zip(&raw.hourly.wave_period)
        .zip(&raw.hourly.wave_direction)
        .map(|(((time, height), period), direction)| {
            let height_m = height.unwrap_or(0.0);
            let period_s = period.unwrap_or(0.0);
            let direction_deg = direction.unwrap_or(0.0);
            let (rating, score) = surf_quality(height_m, period_s);
            HourlySurf {
                time: time.clone(),
                wave_height_ft: meters_to_feet(height_m),
                wave_period_s: round1(period_s),
                swell_direction: direction_label(direction_deg).to_string(),
                surf_rating: rating.to_string(),
                quality_score: score,
            }
        })
        .collect();

    let daily = raw
        .daily
        .time
        .iter()
        .zip(&raw.daily.wave_height_max)
        .zip(&raw.daily.wave_period_max)
        .zip(&raw.daily.wave_direction_dominant)
        .map(|(((date, height), period), direction)| {
            let (rating, score) = surf_quality(*height, *period);
            DailySurf {
                date: date.clone(),
                wave_height_ft: meters_to_feet(*height),
                wave_period_s: round1(*period),
                swell_direction: direction_label(*direction).to_string(),
                surf_rating: rating.to_string(),
                quality_score: score,
            }
        })
        .collect();

    SurfSnapshot {
        sea_temp_f: round1(sea_temp_f),
        wave_height_ft: meters_to_feet(raw.current.wave_height),
        wave_period_s: round1(raw.current.wave_period),
        swell_direction: direction_label(raw.current.wave_direction).to_string(),
        surf_rating: rating.to_string(),
        quality_score: score,
        hourly,
        daily,
    }
}
