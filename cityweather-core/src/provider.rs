use crate::{Config, WeatherReading, provider::openweather::OpenWeatherProvider};
use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

pub mod openweather;

/// Failure of one provider call, classified for display.
///
/// Every provider error is terminal for the current lookup: the results
/// view converts it into an error message and the user resubmits from the
/// entry view to try again.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// No city matched the query (HTTP 404).
    #[error("no city matched the query")]
    NotFound,

    /// The API credential was rejected (HTTP 401).
    #[error("API credential rejected")]
    Unauthorized,

    /// The provider could not be reached at all.
    #[error("provider unreachable: {0}")]
    Unreachable(String),

    /// Any other failure: unexpected status, malformed body.
    #[error("provider failure: {0}")]
    Unknown(String),
}

impl ProviderError {
    /// The message shown to the user for this failure.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            ProviderError::NotFound => "City not found! Try another city.",
            ProviderError::Unauthorized => "Invalid API key.",
            ProviderError::Unreachable(_) | ProviderError::Unknown(_) => {
                "Failed to fetch weather data. Try again later."
            }
        }
    }
}

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch current conditions for `city`. Exactly one network round trip;
    /// no retry.
    async fn current_weather(&self, city: &str) -> Result<WeatherReading, ProviderError>;
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<OpenWeatherProvider> {
    let api_key = config.api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No API key configured.\n\
             Hint: run `cityweather configure` and enter your OpenWeather API key."
        )
    })?;

    Ok(OpenWeatherProvider::new(api_key.to_owned()))
}
