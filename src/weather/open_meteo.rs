#[cfg(test)]
#[path = "open_meteo_test.rs"]
mod tests;

use crate::config::constants::{FORECAST_ENDPOINT, GEOCODING_ENDPOINT};
use crate::config::user_agent;
use async_trait::async_trait;
use eyre::{Context, Result};
use serde::Deserialize;
use std::time;

use super::{CurrentConditions, WeatherLookup, WeatherReport};

/// Open-Meteo client: geocode a city name, then fetch current conditions
/// for the first match.
pub struct OpenMeteo {
    geocoding_endpoint: String,
    forecast_endpoint: String,
    timeout: Option<time::Duration>,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    // Absent entirely when nothing matched
    #[serde(default)]
    results: Vec<GeocodeMatch>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GeocodeMatch {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: serde_json::Value,
}

impl OpenMeteo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_geocoding_endpoint(mut self, endpoint: &str) -> Self {
        self.geocoding_endpoint = endpoint.trim_end_matches('/').to_string();
        self
    }

    pub fn with_forecast_endpoint(mut self, endpoint: &str) -> Self {
        self.forecast_endpoint = endpoint.trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: time::Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub async fn geocode(&self, city: &str) -> Result<Option<GeocodeMatch>> {
        let mut req = self
            .client
            .get(format!("{}/v1/search", self.geocoding_endpoint))
            .query(&[("name", city), ("count", "1")])
            .header("User-Agent", user_agent());
        if let Some(timeout) = self.timeout {
            req = req.timeout(timeout);
        }

        let res = req
            .send()
            .await
            .wrap_err("geocoding city")?
            .error_for_status()
            .wrap_err("geocoding city")?
            .json::<GeocodeResponse>()
            .await
            .wrap_err("parsing geocoding response")?;

        Ok(res.results.into_iter().next())
    }

    pub async fn current_conditions(&self, place: &GeocodeMatch) -> Result<CurrentConditions> {
        let mut req = self
            .client
            .get(format!("{}/v1/forecast", self.forecast_endpoint))
            .query(&[
                ("latitude", place.latitude.to_string()),
                ("longitude", place.longitude.to_string()),
                ("current", "temperature_2m,wind_speed_10m".to_string()),
            ])
            .header("User-Agent", user_agent());
        if let Some(timeout) = self.timeout {
            req = req.timeout(timeout);
        }

        let res = req
            .send()
            .await
            .wrap_err("fetching current conditions")?
            .error_for_status()
            .wrap_err("fetching current conditions")?
            .json::<ForecastResponse>()
            .await
            .wrap_err("parsing forecast response")?;

        Ok(CurrentConditions(res.current))
    }
}

#[async_trait]
impl WeatherLookup for OpenMeteo {
    async fn current_report(&self, city: String) -> Result<WeatherReport> {
        let place = match self.geocode(&city).await? {
            Some(place) => place,
            None => return Ok(WeatherReport::CityNotFound),
        };

        let conditions = self.current_conditions(&place).await?;
        Ok(WeatherReport::Current(conditions))
    }
}

impl Default for OpenMeteo {
    fn default() -> Self {
        Self {
            geocoding_endpoint: GEOCODING_ENDPOINT.to_string(),
            forecast_endpoint: FORECAST_ENDPOINT.to_string(),
            timeout: None,
            client: reqwest::Client::new(),
        }
    }
}
