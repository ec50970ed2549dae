pub mod open_meteo;

pub use open_meteo::OpenMeteo;

#[cfg(test)]
use mockall::automock;

use crate::config::WeatherConfig;
use async_trait::async_trait;
use eyre::Result;
use std::{fmt::Display, sync::Arc, time::Duration};

/// Outcome of a city lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherReport {
    /// The geocoder had no match for the city.
    CityNotFound,
    Current(CurrentConditions),
}

/// Raw current-conditions payload, displayed as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions(pub serde_json::Value);

impl Display for CurrentConditions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string());
        write!(f, "{}", text)
    }
}

#[async_trait]
#[cfg_attr(test, automock)]
pub trait WeatherLookup {
    async fn current_report(&self, city: String) -> Result<WeatherReport>;
}

pub type ArcWeather = Arc<dyn WeatherLookup + Send + Sync>;

pub fn new_weather(config: &WeatherConfig) -> ArcWeather {
    let mut weather = OpenMeteo::default()
        .with_geocoding_endpoint(&config.geocoding_endpoint)
        .with_forecast_endpoint(&config.forecast_endpoint);
    if let Some(timeout) = config.timeout_secs {
        weather = weather.with_timeout(Duration::from_secs(timeout as u64));
    }
    Arc::new(weather)
}
