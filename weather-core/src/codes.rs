//! WMO weather codes as reported by Open-Meteo.
//!
//! See: https://open-meteo.com/en/docs#weathervariables

use serde::{Deserialize, Serialize};

/// Fallback text for codes outside the description table.
pub const UNKNOWN_CONDITION: &str = "Unknown weather condition";

/// Human-readable description of a weather code.
pub fn describe(code: i32) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        71 => "Slight snow fall",
        73 => "Moderate snow fall",
        75 => "Heavy snow fall",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with slight hail",
        99 => "Thunderstorm with heavy hail",
        _ => UNKNOWN_CONDITION,
    }
}

/// Icon shown next to the temperature on the result card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconVariant {
    Sun,
    Cloud,
    Fog,
    Rain,
    Drizzle,
    Snow,
    Thunder,
    /// Anything the partition below does not name.
    DefaultCloud,
}

impl IconVariant {
    pub const fn all() -> &'static [IconVariant] {
        &[
            IconVariant::Sun,
            IconVariant::Cloud,
            IconVariant::Fog,
            IconVariant::Rain,
            IconVariant::Drizzle,
            IconVariant::Snow,
            IconVariant::Thunder,
            IconVariant::DefaultCloud,
        ]
    }

    /// Terminal glyph for the variant.
    pub fn glyph(&self) -> &'static str {
        match self {
            IconVariant::Sun => "☀",
            IconVariant::Cloud | IconVariant::DefaultCloud => "☁",
            IconVariant::Fog => "🌫",
            IconVariant::Rain => "🌧",
            IconVariant::Drizzle => "🌦",
            IconVariant::Snow => "❄",
            IconVariant::Thunder => "⚡",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IconVariant::Sun => "sun",
            IconVariant::Cloud => "cloud",
            IconVariant::Fog => "fog",
            IconVariant::Rain => "rain",
            IconVariant::Drizzle => "drizzle",
            IconVariant::Snow => "snow",
            IconVariant::Thunder => "thunder",
            IconVariant::DefaultCloud => "default_cloud",
        }
    }
}

impl std::fmt::Display for IconVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Map a weather code to its icon. Total over `i32`.
pub fn icon_for(code: i32) -> IconVariant {
    match code {
        0 | 1 => IconVariant::Sun,
        2 | 3 => IconVariant::Cloud,
        45 | 48 => IconVariant::Fog,
        51 | 53 | 55 | 61 | 63 | 65 | 80 | 81 | 82 => IconVariant::Rain,
        56 | 57 | 66 | 67 => IconVariant::Drizzle,
        71 | 73 | 75 | 85 | 86 => IconVariant::Snow,
        95 | 96 | 99 => IconVariant::Thunder,
        _ => IconVariant::DefaultCloud,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &[(i32, &str)] = &[
        (0, "Clear sky"),
        (1, "Mainly clear"),
        (2, "Partly cloudy"),
        (3, "Overcast"),
        (45, "Fog"),
        (48, "Depositing rime fog"),
        (51, "Light drizzle"),
        (53, "Moderate drizzle"),
        (55, "Dense drizzle"),
        (61, "Slight rain"),
        (63, "Moderate rain"),
        (65, "Heavy rain"),
        (71, "Slight snow fall"),
        (73, "Moderate snow fall"),
        (75, "Heavy snow fall"),
        (80, "Slight rain showers"),
        (81, "Moderate rain showers"),
        (82, "Violent rain showers"),
        (95, "Thunderstorm"),
        (96, "Thunderstorm with slight hail"),
        (99, "Thunderstorm with heavy hail"),
    ];

    #[test]
    fn describe_known_codes() {
        for (code, text) in TABLE {
            assert_eq!(describe(*code), *text, "code {code}");
        }
    }

    #[test]
    fn describe_unknown_codes() {
        for code in [-1, 4, 56, 77, 86, 100, i32::MIN, i32::MAX] {
            assert_eq!(describe(code), UNKNOWN_CONDITION, "code {code}");
        }
    }

    #[test]
    fn icon_partition() {
        let buckets: &[(&[i32], IconVariant)] = &[
            (&[0, 1], IconVariant::Sun),
            (&[2, 3], IconVariant::Cloud),
            (&[45, 48], IconVariant::Fog),
            (&[51, 53, 55, 61, 63, 65, 80, 81, 82], IconVariant::Rain),
            (&[56, 57, 66, 67], IconVariant::Drizzle),
            (&[71, 73, 75, 85, 86], IconVariant::Snow),
            (&[95, 96, 99], IconVariant::Thunder),
        ];

        for (codes, expected) in buckets {
            for code in *codes {
                assert_eq!(icon_for(*code), *expected, "code {code}");
            }
        }

        // every other integer in a generous window falls through
        let listed: Vec<i32> = buckets.iter().flat_map(|(c, _)| c.iter().copied()).collect();
        for code in -50..200 {
            if !listed.contains(&code) {
                assert_eq!(icon_for(code), IconVariant::DefaultCloud, "code {code}");
            }
        }
        assert_eq!(icon_for(i32::MIN), IconVariant::DefaultCloud);
        assert_eq!(icon_for(i32::MAX), IconVariant::DefaultCloud);
    }

    #[test]
    fn labels_are_distinct() {
        let mut labels: Vec<&str> = IconVariant::all().iter().map(|v| v.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), IconVariant::all().len());
    }
}
