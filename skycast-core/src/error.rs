use thiserror::Error;

/// Failure taxonomy for the skycast pipeline.
///
/// `MalformedRecord` is recovered inside the normalizer (the offending sample
/// is skipped). `UpstreamUnavailable` and `ConfigurationMissing` on the news
/// path are recovered inside the content cache (fallback headlines). Weather
/// failures propagate so the caller can show an explicit error state.
#[derive(Debug, Error)]
pub enum SkycastError {
    /// Network error, timeout, or non-2xx response from a provider.
    #[error("{provider} request failed: {message}")]
    UpstreamUnavailable {
        provider: &'static str,
        message: String,
    },

    /// Provider responded successfully but with no usable results.
    #[error("no forecast data returned for '{0}'")]
    NoDataForLocation(String),

    /// A single sample is missing a required field.
    #[error("malformed forecast sample: {0}")]
    MalformedRecord(String),

    /// A required credential or setting is absent.
    #[error("missing configuration: {0}")]
    ConfigurationMissing(&'static str),
}

impl SkycastError {
    pub fn upstream(provider: &'static str, message: impl Into<String>) -> Self {
        Self::UpstreamUnavailable {
            provider,
            message: message.into(),
        }
    }

    /// Human-readable message suitable for end-user display.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            SkycastError::UpstreamUnavailable { provider, .. } => {
                format!("Could not retrieve data from {provider}. Please check your connection and try again.")
            }
            SkycastError::NoDataForLocation(location) => {
                format!("No weather data available for '{location}'. Please check the location name.")
            }
            SkycastError::MalformedRecord(_) => {
                "Received incomplete data from the weather provider.".to_string()
            }
            SkycastError::ConfigurationMissing(what) => {
                format!("Missing configuration: {what}. Run `skycast configure` first.")
            }
        }
    }
}
