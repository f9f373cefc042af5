use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Offset, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::{
    classify::icon_for_condition_code,
    error::SkycastError,
    model::{CurrentConditions, ForecastBatch, ForecastSample},
};

use super::WeatherProvider;

const PROVIDER: &str = "openweather";
const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String, timeout: Duration) -> Self {
        Self::with_base_url(api_key, timeout, DEFAULT_BASE_URL.to_string())
    }

    /// Same as [`new`](Self::new) with an overridable endpoint, for tests.
    pub fn with_base_url(api_key: String, timeout: Duration, base_url: String) -> Self {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            api_key,
            base_url,
            http,
        }
    }

    async fn get_json(&self, endpoint: &str, location: &str) -> Result<String, SkycastError> {
        let url = format!("{}/{endpoint}", self.base_url);
        debug!("requesting {endpoint} for '{location}'");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", location),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(|e| {
                SkycastError::upstream(PROVIDER, format!("failed to send {endpoint} request: {e}"))
            })?;

        let status = res.status();
        let body = res.text().await.map_err(|e| {
            SkycastError::upstream(PROVIDER, format!("failed to read {endpoint} response: {e}"))
        })?;

        if !status.is_success() {
            return Err(SkycastError::upstream(
                PROVIDER,
                format!("{endpoint} request returned status {status}: {}", truncate_body(&body)),
            ));
        }

        Ok(body)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, location: &str) -> Result<CurrentConditions, SkycastError> {
        let body = self.get_json("weather", location).await?;

        let parsed: OwCurrentResponse = serde_json::from_str(&body).map_err(|e| {
            SkycastError::upstream(PROVIDER, format!("failed to parse current weather JSON: {e}"))
        })?;

        let offset = fixed_offset(parsed.timezone);
        let observation_time = unix_to_utc(parsed.dt).unwrap_or_else(Utc::now);

        let (condition_description, condition_code) = parsed
            .weather
            .first()
            .map(|w| (w.description.clone(), w.icon.clone()))
            .unwrap_or_else(|| ("Unknown".to_string(), String::new()));

        Ok(CurrentConditions {
            location_name: parsed.name,
            latitude: parsed.coord.lat,
            longitude: parsed.coord.lon,
            temperature_c: parsed.main.temp,
            feels_like_c: parsed.main.feels_like,
            humidity_pct: parsed.main.humidity,
            wind_speed_mps: parsed.wind.speed,
            pressure_hpa: parsed.main.pressure,
            visibility_km: parsed.visibility.unwrap_or(0.0) / 1000.0,
            rain_1h_mm: parsed.rain.and_then(|r| r.one_h).unwrap_or(0.0),
            condition_icon: icon_for_condition_code(&condition_code).to_string(),
            condition_description,
            sunrise_local: format_local_hm(parsed.sys.sunrise, offset),
            sunset_local: format_local_hm(parsed.sys.sunset, offset),
            observation_time,
            utc_offset_seconds: parsed.timezone,
        })
    }

    async fn forecast(&self, location: &str) -> Result<ForecastBatch, SkycastError> {
        let body = self.get_json("forecast", location).await?;

        let parsed: OwForecastResponse = serde_json::from_str(&body).map_err(|e| {
            SkycastError::upstream(PROVIDER, format!("failed to parse forecast JSON: {e}"))
        })?;

        if parsed.list.is_empty() {
            return Err(SkycastError::NoDataForLocation(location.to_string()));
        }

        let samples = parsed
            .list
            .into_iter()
            .filter_map(|entry| {
                // Entries without a usable timestamp cannot be placed on the
                // timeline at all; everything else is left for the
                // normalizer to judge.
                let timestamp = unix_to_utc(entry.dt)?;
                let (condition_description, condition_code) = entry
                    .weather
                    .into_iter()
                    .next()
                    .map(|w| (w.description, w.icon))
                    .unwrap_or_else(|| ("Unknown".to_string(), String::new()));

                Some(ForecastSample {
                    timestamp,
                    temperature: entry.main.temp,
                    humidity: entry.main.humidity,
                    condition_code,
                    condition_description,
                })
            })
            .collect();

        let location_name = format!("{}, {}", parsed.city.name, parsed.city.country);

        Ok(ForecastBatch {
            location_name,
            utc_offset_seconds: parsed.city.timezone,
            samples,
        })
    }
}

#[derive(Debug, Deserialize)]
struct OwCoord {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
    pressure: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwRain {
    #[serde(rename = "1h")]
    one_h: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    dt: i64,
    /// Shift from UTC in seconds.
    timezone: i32,
    coord: OwCoord,
    main: OwCurrentMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
    visibility: Option<f64>,
    rain: Option<OwRain>,
    sys: OwSys,
}

/// Forecast entries keep numeric fields optional so one incomplete entry
/// cannot fail the whole batch; the normalizer skips them item by item.
#[derive(Debug, Deserialize)]
struct OwForecastMain {
    temp: Option<f64>,
    humidity: Option<u8>,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: i64,
    main: OwForecastMain,
    #[serde(default)]
    weather: Vec<OwWeather>,
}

#[derive(Debug, Deserialize)]
struct OwCity {
    name: String,
    country: String,
    /// Shift from UTC in seconds.
    timezone: i32,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    city: OwCity,
    list: Vec<OwForecastEntry>,
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0)
}

fn fixed_offset(utc_offset_seconds: i32) -> FixedOffset {
    FixedOffset::east_opt(utc_offset_seconds).unwrap_or_else(|| Utc.fix())
}

fn format_local_hm(ts: i64, offset: FixedOffset) -> String {
    unix_to_utc(ts)
        .map(|dt| dt.with_timezone(&offset).format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}
