use crate::{
    Config,
    error::SkycastError,
    model::{CurrentConditions, ForecastBatch},
    provider::open_weather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod open_weather;

/// Abstraction over the primary weather upstream.
///
/// Failures on this path are typed and propagate to the caller — stale data
/// is never silently substituted for the primary forecast.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Point-in-time conditions for a named location.
    async fn current(&self, location: &str) -> Result<CurrentConditions, SkycastError>;

    /// Multi-day fine-grained forecast series for a named location.
    async fn forecast(&self, location: &str) -> Result<ForecastBatch, SkycastError>;
}

/// Construct the weather provider from config, failing fast when the
/// credential is absent.
pub fn provider_from_config(config: &Config) -> Result<Box<dyn WeatherProvider>, SkycastError> {
    let api_key = config
        .open_weather_api_key()
        .ok_or(SkycastError::ConfigurationMissing("OpenWeather API key"))?;

    Ok(Box::new(OpenWeatherProvider::new(
        api_key.to_owned(),
        config.request_timeout(),
    )))
}
