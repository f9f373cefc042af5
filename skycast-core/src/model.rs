use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::classify::TemperatureBand;

/// Raw forecast sample as delivered by the provider.
///
/// `temperature` and `humidity` stay optional here because the upstream can
/// omit them per entry; the normalizer decides what to do with incomplete
/// samples. Immutable once constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastSample {
    pub timestamp: DateTime<Utc>,
    /// Temperature in °C.
    pub temperature: Option<f64>,
    /// Relative humidity, 0–100 %.
    pub humidity: Option<u8>,
    /// Provider icon code, e.g. "01d".
    pub condition_code: String,
    pub condition_description: String,
}

/// A forecast response: resolved location plus its raw sample series,
/// chronologically ordered as delivered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastBatch {
    pub location_name: String,
    /// Location's fixed offset from UTC, seconds. May be negative.
    pub utc_offset_seconds: i32,
    pub samples: Vec<ForecastSample>,
}

/// A forecast sample converted to location-local time with derived
/// annotations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    /// `YYYY-MM-DD` in location-local time.
    pub local_date: String,
    /// `HH:MM`, 24-hour, location-local.
    pub local_time: String,
    pub temperature: f64,
    pub humidity: u8,
    pub condition_description: String,
    pub condition_icon: String,
    pub temperature_band: TemperatureBand,
}

/// Per-day reduction of a batch of normalized records. Recomputed wholesale
/// on every aggregation, never incrementally updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    pub date: String,
    pub min_temp: f64,
    pub max_temp: f64,
    /// Rounded to 1 decimal, half away from zero.
    pub mean_temp: f64,
    /// Rounded to 1 decimal, half away from zero.
    pub mean_humidity: f64,
    /// Most common condition description of the day; ties go to the
    /// chronologically first of the equally frequent descriptions.
    pub condition: String,
    pub condition_icon: String,
}

/// Current-conditions snapshot for a location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub location_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub pressure_hpa: f64,
    pub visibility_km: f64,
    /// Rain over the last hour, mm. Zero when the provider reports none.
    pub rain_1h_mm: f64,
    pub condition_description: String,
    pub condition_icon: String,
    /// `HH:MM` in location-local time.
    pub sunrise_local: String,
    /// `HH:MM` in location-local time.
    pub sunset_local: String,
    pub observation_time: DateTime<Utc>,
    pub utc_offset_seconds: i32,
}

/// A single news headline. Every string field is guaranteed non-empty:
/// upstream omissions are replaced with placeholder text before delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub description: String,
    pub body: String,
    pub url: String,
    pub source: String,
    pub published_at: Option<DateTime<Utc>>,
    /// Derived from title keywords.
    pub icon: String,
}
