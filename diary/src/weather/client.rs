use reqwest::Client;
use std::time::Duration;

use crate::config::WeatherConfig;
use crate::error::{DiaryError, Result, WeatherError};
use crate::models::ParsedWeather;

use super::parse_weather;

#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    config: WeatherConfig,
}

impl WeatherClient {
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DiaryError::Internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    pub fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    pub fn location(&self) -> &str {
        &self.config.location
    }

    /// One GET against `{base_url}/weather`. Returns the body of a 2xx
    /// response; everything else is an error.
    pub async fn fetch_raw(&self) -> std::result::Result<String, WeatherError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(WeatherError::NotConfigured)?;

        let url = format!("{}/weather", self.config.base_url.trim_end_matches('/'));

        let response = self
            .client
            .get(&url)
            .query(&[("q", self.config.location.as_str()), ("appid", api_key)])
            .send()
            .await
            .map_err(WeatherError::Network)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                status = status.as_u16(),
                location = %self.config.location,
                "Weather API returned an error status"
            );
            return Err(WeatherError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response.text().await.map_err(WeatherError::Network)
    }

    /// Fetch and parse the current weather for the configured location.
    pub async fn fetch_current(&self) -> std::result::Result<ParsedWeather, WeatherError> {
        let body = self.fetch_raw().await?;
        parse_weather(&body)
    }
}
