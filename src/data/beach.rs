//! Static beach configuration
//!
//! The fixed set of North Carolina beaches served by the API, with paired
//! marine-observation and weather-city coordinates. Loaded at startup and
//! never mutated; summary listings preserve this order.

use super::Beach;

/// Static array of all configured beaches
///
/// Each beach carries two coordinate pairs: the surf break itself (for the
/// marine endpoint) and the nearest weather-reporting city (for the general
/// forecast endpoint).
pub static BEACHES: [Beach; 4] = [
    Beach {
        slug: "wrightsville",
        name: "Wrightsville Beach",
        latitude: 34.2097,
        longitude: -77.7956,
        weather_city: "Wilmington",
        weather_lat: 34.2257,
        weather_lon: -77.9447,
    },
    Beach {
        slug: "carolina",
        name: "Carolina Beach",
        latitude: 34.0353,
        longitude: -77.8936,
        weather_city: "Carolina Beach",
        weather_lat: 34.0353,
        weather_lon: -77.8864,
    },
    Beach {
        slug: "kure",
        name: "Kure Beach",
        latitude: 33.9968,
        longitude: -77.9072,
        weather_city: "Kure Beach",
        weather_lat: 33.9968,
        weather_lon: -77.9072,
    },
    Beach {
        slug: "surf-city",
        name: "Surf City",
        latitude: 34.4271,
        longitude: -77.5461,
        weather_city: "Surf City",
        weather_lat: 34.4235,
        weather_lon: -77.5393,
    },
];

/// Get a beach by its slug
///
/// # Arguments
///
/// * `slug` - The unique identifier for the beach (e.g., "wrightsville")
///
/// # Returns
///
/// Returns `Some(&Beach)` if found, `None` otherwise
pub fn beach_by_slug(slug: &str) -> Option<&'static Beach> {
    BEACHES.iter().find(|beach| beach.slug == slug)
}

/// Get all configured beaches in configuration order
pub fn all_beaches() -> &'static [Beach] {
    &BEACHES
}
