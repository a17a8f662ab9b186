//! Surf and weather classification utilities
//!
//! Pure helpers shared by the forecast normalizer: WMO weather code
//! descriptions, 16-point compass labels, and the surf quality score.

/// Factor for converting wave heights from meters to feet.
const METERS_TO_FEET: f64 = 3.281;

/// The 16 compass points in clockwise order starting at north.
const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Maps a WMO weather code to its description and icon key.
///
/// Total over all integers: unrecognized codes map to ("Unknown", "unknown")
/// rather than failing.
pub fn describe_weather_code(code: i32) -> (&'static str, &'static str) {
    match code {
        0 => ("Clear Sky", "clear"),
        1 => ("Mainly Clear", "clear"),
        2 => ("Partly Cloudy", "partly-cloudy"),
        3 => ("Overcast", "overcast"),
        45 | 48 => ("Foggy", "fog"),
        51 | 53 | 55 => ("Drizzle", "drizzle"),
        61 | 63 | 65 => ("Rain", "rain"),
        66 | 67 => ("Freezing Rain", "freezing-rain"),
        71 | 73 | 75 => ("Snow", "snow"),
        77 => ("Snow Grains", "snow"),
        80 | 81 | 82 => ("Rain Showers", "rain"),
        85 | 86 => ("Snow Showers", "snow"),
        95 => ("Thunderstorm", "thunderstorm"),
        96 | 99 => ("Thunderstorm w/ Hail", "thunderstorm"),
        _ => ("Unknown", "unknown"),
    }
}

/// Converts a compass bearing in degrees to a 16-point direction label.
///
/// Each sector spans 22.5 degrees centered on its label. Any finite input is
/// accepted; values outside 0..360 wrap around.
pub fn direction_label(degrees: f64) -> &'static str {
    let sector = ((degrees / 22.5).round() as i64).rem_euclid(16) as usize;
    COMPASS_POINTS[sector]
}

/// Scores surf conditions from wave height (meters) and period (seconds).
///
/// Height contributes up to 70 points (maxing out at 2.5 m) and period up to
/// 30 points (maxing out at 14 s). Returns the rating label and a 0-100 score.
pub fn surf_quality(wave_height_m: f64, wave_period_s: f64) -> (&'static str, u8) {
    let height_score = (wave_height_m / 2.5).min(1.0) * 70.0;
    let period_score = (wave_period_s / 14.0).min(1.0) * 30.0;
    let score = (height_score + period_score).round().clamp(0.0, 100.0) as u8;

    let label = match score {
        0..=9 => "Flat",
        10..=24 => "Poor",
        25..=39 => "Poor to Fair",
        40..=54 => "Fair",
        55..=69 => "Fair to Good",
        70..=84 => "Good",
        85..=94 => "Good to Epic",
        _ => "Epic",
    };
    (label, score)
}

/// Converts a wave height in meters to feet, rounded to one decimal place.
pub fn meters_to_feet(meters: f64) -> f64 {
    round1(meters * METERS_TO_FEET)
}

/// Rounds a value to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_weather_code_known_codes() {
        let cases = [
            (0, "Clear Sky", "clear"),
            (1, "Mainly Clear", "clear"),
            (2, "Partly Cloudy", "partly-cloudy"),
            (3, "Overcast", "overcast"),
            (45, "Foggy", "fog"),
            (48, "Foggy", "fog"),
            (51, "Drizzle", "drizzle"),
            (53, "Drizzle", "drizzle"),
            (55, "Drizzle", "drizzle"),
            (61, "Rain", "rain"),
            (63, "Rain", "rain"),
            (65, "Rain", "rain"),
            (66, "Freezing Rain", "freezing-rain"),
            (67, "Freezing Rain", "freezing-rain"),
            (71, "Snow", "snow"),
            (73, "Snow", "snow"),
            (75, "Snow", "snow"),
            (77, "Snow Grains", "snow"),
            (80, "Rain Showers", "rain"),
            (81, "Rain Showers", "rain"),
            (82, "Rain Showers", "rain"),
            (85, "Snow Showers", "snow"),
            (86, "Snow Showers", "snow"),
            (95, "Thunderstorm", "thunderstorm"),
            (96, "Thunderstorm w/ Hail", "thunderstorm"),
            (99, "Thunderstorm w/ Hail", "thunderstorm"),
        ];

        for (code, description, icon) in cases {
            assert_eq!(
                describe_weather_code(code),
                (description, icon),
                "code {} mapped incorrectly",
                code
            );
        }
    }

    #[test]
    fn test_describe_weather_code_unknown_codes() {
        assert_eq!(describe_weather_code(4), ("Unknown", "unknown"));
        assert_eq!(describe_weather_code(100), ("Unknown", "unknown"));
        assert_eq!(describe_weather_code(-1), ("Unknown", "unknown"));
        assert_eq!(describe_weather_code(i32::MAX), ("Unknown", "unknown"));
    }

    #[test]
    fn test_direction_label_cardinal_points() {
        assert_eq!(direction_label(0.0), "N");
        assert_eq!(direction_label(90.0), "E");
        assert_eq!(direction_label(180.0), "S");
        assert_eq!(direction_label(270.0), "W");
    }

    #[test]
    fn test_direction_label_wraps_at_360() {
        assert_eq!(direction_label(360.0), "N");
        assert_eq!(direction_label(720.0), "N");
        assert_eq!(direction_label(450.0), "E");
    }

    #[test]
    fn test_direction_label_sector_boundaries() {
        // Within 11.25 degrees of north stays "N"
        assert_eq!(direction_label(11.0), "N");
        // Past the boundary rounds into the next sector
        assert_eq!(direction_label(23.0), "NNE");
        assert_eq!(direction_label(348.0), "NNW");
        assert_eq!(direction_label(350.0), "N");
    }

    #[test]
    fn test_direction_label_negative_degrees() {
        assert_eq!(direction_label(-90.0), "W");
        assert_eq!(direction_label(-180.0), "S");
        assert_eq!(direction_label(-360.0), "N");
    }

    #[test]
    fn test_surf_quality_flat_conditions() {
        assert_eq!(surf_quality(0.0, 0.0), ("Flat", 0));
    }

    #[test]
    fn test_surf_quality_typical_fair_day() {
        // 0.8m at 9s: height 22.4 + period ~19.29 rounds to 42
        assert_eq!(surf_quality(0.8, 9.0), ("Fair", 42));
    }

    #[test]
    fn test_surf_quality_maximum_score() {
        assert_eq!(surf_quality(2.5, 14.0), ("Epic", 100));
        // Both inputs cap out, larger values add nothing
        assert_eq!(surf_quality(5.0, 30.0), ("Epic", 100));
    }

    #[test]
    fn test_surf_quality_period_only() {
        // Period alone maxes out at 30 points
        assert_eq!(surf_quality(0.0, 14.0), ("Poor to Fair", 30));
        assert_eq!(surf_quality(0.0, 4.0), ("Flat", 9));
    }

    #[test]
    fn test_surf_quality_label_buckets() {
        // Height-only inputs chosen to land on bucket boundaries
        assert_eq!(surf_quality(0.25, 0.0).0, "Flat"); // 7
        assert_eq!(surf_quality(0.5, 0.0).0, "Poor"); // 14
        assert_eq!(surf_quality(1.0, 0.0).0, "Poor to Fair"); // 28
        assert_eq!(surf_quality(1.6, 0.0).0, "Fair"); // 45
        assert_eq!(surf_quality(2.0, 0.0).0, "Fair to Good"); // 56
        assert_eq!(surf_quality(2.5, 2.0).0, "Good"); // 74
        assert_eq!(surf_quality(2.5, 8.0).0, "Good to Epic"); // 87
        assert_eq!(surf_quality(2.5, 13.0).0, "Epic"); // 98
    }

    #[test]
    fn test_meters_to_feet_conversion() {
        assert!((meters_to_feet(0.0) - 0.0).abs() < f64::EPSILON);
        assert!((meters_to_feet(1.0) - 3.3).abs() < 0.001);
        assert!((meters_to_feet(0.8) - 2.6).abs() < 0.001);
        assert!((meters_to_feet(2.5) - 8.2).abs() < 0.001);
    }

    #[test]
    fn test_meters_to_feet_monotonic() {
        let samples = [0.0, 0.1, 0.5, 0.8, 1.0, 1.5, 2.0, 2.5, 3.0];
        for pair in samples.windows(2) {
            assert!(
                meters_to_feet(pair[0]) <= meters_to_feet(pair[1]),
                "conversion not monotonic between {} and {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_round1() {
        assert!((round1(2.625) - 2.6).abs() < f64::EPSILON);
        assert!((round1(2.68) - 2.7).abs() < f64::EPSILON);
        assert!((round1(-1.25) - (-1.3)).abs() < f64::EPSILON);
        assert!((round1(0.0) - 0.0).abs() < f64::EPSILON);
    }
}
