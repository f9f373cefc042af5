//! Pure temperature and condition classification.
//!
//! Two distinct temperature scales live here. Display bands (and the season
//! label derived from them) cut at 0/15/25 °C; the UV-risk label cuts at
//! 10/20/25 °C. The two scales are intentionally separate and must not be
//! unified. All boundaries are inclusive on the lower end.

use serde::{Deserialize, Serialize};

/// Display band for a temperature reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureBand {
    Cold,
    Cool,
    Warm,
    Hot,
}

impl TemperatureBand {
    /// `t < 0 → Cold`, `0 ≤ t < 15 → Cool`, `15 ≤ t < 25 → Warm`, `t ≥ 25 → Hot`.
    #[must_use]
    pub fn for_celsius(temp_c: f64) -> Self {
        if temp_c < 0.0 {
            TemperatureBand::Cold
        } else if temp_c < 15.0 {
            TemperatureBand::Cool
        } else if temp_c < 25.0 {
            TemperatureBand::Warm
        } else {
            TemperatureBand::Hot
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureBand::Cold => "cold",
            TemperatureBand::Cool => "cool",
            TemperatureBand::Warm => "warm",
            TemperatureBand::Hot => "hot",
        }
    }
}

impl std::fmt::Display for TemperatureBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Season name plus a one-line climate descriptor, four-way on the band
/// thresholds.
#[must_use]
pub fn season_for_celsius(temp_c: f64) -> (&'static str, &'static str) {
    match TemperatureBand::for_celsius(temp_c) {
        TemperatureBand::Cold => ("Winter", "Freezing conditions, wrap up well"),
        TemperatureBand::Cool => ("Autumn", "Cool and crisp"),
        TemperatureBand::Warm => ("Spring", "Mild and comfortable"),
        TemperatureBand::Hot => ("Summer", "Hot, stay hydrated"),
    }
}

/// UV-risk label. Uses its own 10/20/25 cut points, not the band thresholds.
#[must_use]
pub fn uv_risk_for_celsius(temp_c: f64) -> &'static str {
    if temp_c < 10.0 {
        "Low"
    } else if temp_c < 20.0 {
        "Moderate"
    } else if temp_c < 25.0 {
        "High"
    } else {
        "Very High"
    }
}

/// Glyph for an OpenWeather icon code (e.g. `"01d"`), keyed on the first two
/// characters. Unknown, empty, or malformed codes get the default glyph.
#[must_use]
pub fn icon_for_condition_code(code: &str) -> &'static str {
    match code.get(..2).unwrap_or("") {
        "01" => "☀️",
        "02" => "⛅",
        "03" => "☁️",
        "04" => "☁️",
        "09" => "🌧️",
        "10" => "🌦️",
        "11" => "⛈️",
        "13" => "🌨️",
        "50" => "🌫️",
        _ => "🌤️",
    }
}

/// Glyph for a news headline, scanning six keyword groups in priority order.
#[must_use]
pub fn icon_for_headline(text: &str) -> &'static str {
    let lower = text.to_lowercase();
    let groups: [(&[&str], &'static str); 6] = [
        (&["cyclone", "hurricane", "typhoon"], "🌀"),
        (&["flood", "rain", "monsoon"], "🌧️"),
        (&["fire", "wildfire", "bushfire"], "🔥"),
        (&["snow", "blizzard", "ice"], "❄️"),
        (&["heat", "heatwave", "drought"], "🌡️"),
        (&["storm", "thunder", "lightning"], "⛈️"),
    ];

    for (keywords, glyph) in groups {
        if keywords.iter().any(|k| lower.contains(k)) {
            return glyph;
        }
    }
    "📰"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries_are_lower_inclusive() {
        assert_eq!(TemperatureBand::for_celsius(-0.001), TemperatureBand::Cold);
        assert_eq!(TemperatureBand::for_celsius(0.0), TemperatureBand::Cool);
        assert_eq!(TemperatureBand::for_celsius(14.999), TemperatureBand::Cool);
        assert_eq!(TemperatureBand::for_celsius(15.0), TemperatureBand::Warm);
        assert_eq!(TemperatureBand::for_celsius(25.0), TemperatureBand::Hot);
    }

    #[test]
    fn season_follows_band_thresholds() {
        assert_eq!(season_for_celsius(-5.0).0, "Winter");
        assert_eq!(season_for_celsius(7.0).0, "Autumn");
        assert_eq!(season_for_celsius(18.0).0, "Spring");
        assert_eq!(season_for_celsius(30.0).0, "Summer");
    }

    #[test]
    fn uv_scale_is_distinct_from_band_scale() {
        // 12 °C sits in the Cool band but already rates Moderate UV.
        assert_eq!(TemperatureBand::for_celsius(12.0), TemperatureBand::Cool);
        assert_eq!(uv_risk_for_celsius(12.0), "Moderate");

        // 22 °C is Warm for the band, High for UV.
        assert_eq!(TemperatureBand::for_celsius(22.0), TemperatureBand::Warm);
        assert_eq!(uv_risk_for_celsius(22.0), "High");

        assert_eq!(uv_risk_for_celsius(9.999), "Low");
        assert_eq!(uv_risk_for_celsius(10.0), "Moderate");
        assert_eq!(uv_risk_for_celsius(25.0), "Very High");
    }

    #[test]
    fn condition_icons_key_on_code_prefix() {
        assert_eq!(icon_for_condition_code("01d"), "☀️");
        assert_eq!(icon_for_condition_code("01n"), "☀️");
        assert_eq!(icon_for_condition_code("10d"), "🌦️");
        assert_eq!(icon_for_condition_code("13n"), "🌨️");
    }

    #[test]
    fn unknown_condition_codes_fall_back() {
        assert_eq!(icon_for_condition_code(""), "🌤️");
        assert_eq!(icon_for_condition_code("9"), "🌤️");
        assert_eq!(icon_for_condition_code("99x"), "🌤️");
        // Multi-byte first character must not panic the prefix slice.
        assert_eq!(icon_for_condition_code("☀️"), "🌤️");
    }

    #[test]
    fn headline_icons_match_first_group_in_priority_order() {
        // "hurricane" (cyclone group) wins over "rain" (flood group).
        assert_eq!(icon_for_headline("Hurricane brings torrential rain"), "🌀");
        assert_eq!(icon_for_headline("Flash FLOOD warning issued"), "🌧️");
        assert_eq!(icon_for_headline("Wildfire spreads north"), "🔥");
        assert_eq!(icon_for_headline("Blizzard closes mountain pass"), "❄️");
        assert_eq!(icon_for_headline("Record heatwave continues"), "🌡️");
        assert_eq!(icon_for_headline("Thunder expected overnight"), "⛈️");
    }

    #[test]
    fn headline_icon_defaults_when_nothing_matches() {
        assert_eq!(icon_for_headline(""), "📰");
        assert_eq!(icon_for_headline("Local council elects new mayor"), "📰");
    }
}
