//! Blocking HTTP client for the weather provider.
//!
//! # Responsibility
//! - Request current conditions and the 5-day forecast by city or
//!   coordinates, then normalize into the display shape.
//! - Validate the env-driven provider configuration up front.
//!
//! # Invariants
//! - Provider HTTP 404/401/429 map to typed errors the UI can phrase.
//! - One fetch, one report: no retry policy lives here.

use crate::model::weather::WeatherData;
use crate::weather::normalize::normalize;
use crate::weather::provider::{CurrentConditions, ForecastResponse};
use log::{error, info};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Environment variable holding the provider API key.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";
/// Environment variable overriding the provider base URL.
pub const BASE_URL_ENV: &str = "OPENWEATHER_BASE_URL";
const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
/// Unconfigured placeholder value shipped in `.env` templates.
const PLACEHOLDER_KEY: &str = "your_api_key_here";

pub type WeatherResult<T> = Result<T, WeatherError>;

/// Client-layer error for configuration and provider interaction.
#[derive(Debug)]
pub enum WeatherError {
    /// API key missing, placeholder, or implausibly short.
    InvalidConfig(String),
    /// Provider does not know the requested city (HTTP 404).
    CityNotFound,
    /// Provider rejected the credential (HTTP 401).
    InvalidApiKey,
    /// Provider quota exhausted (HTTP 429).
    RateLimited,
    /// Any other non-success provider status.
    Status(u16),
    Transport(reqwest::Error),
}

impl Display for WeatherError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(message) => write!(f, "weather config invalid: {message}"),
            Self::CityNotFound => write!(f, "city not found; check the city name"),
            Self::InvalidApiKey => write!(f, "weather API key rejected by provider"),
            Self::RateLimited => write!(f, "weather API call limit exceeded; try again later"),
            Self::Status(code) => write!(f, "weather provider returned HTTP {code}"),
            Self::Transport(err) => write!(f, "{err}"),
        }
    }
}

impl Error for WeatherError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for WeatherError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value)
    }
}

/// Blocking provider client with validated configuration.
#[derive(Debug)]
pub struct WeatherClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl WeatherClient {
    /// Builds a client from `OPENWEATHER_API_KEY` / `OPENWEATHER_BASE_URL`.
    ///
    /// # Errors
    /// Returns `InvalidConfig` when the key is absent, still the template
    /// placeholder, or too short to be a real credential.
    pub fn from_env() -> WeatherResult<Self> {
        let api_key = std::env::var(API_KEY_ENV).unwrap_or_default();
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(api_key, base_url)
    }

    /// Builds a client from explicit configuration (tests, embedding).
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> WeatherResult<Self> {
        let api_key = api_key.into();
        validate_api_key(&api_key)?;
        Ok(Self {
            http: Client::new(),
            api_key,
            base_url: base_url.into(),
        })
    }

    /// Fetches and normalizes weather for a city name.
    pub fn fetch_by_city(&self, city: &str) -> WeatherResult<WeatherData> {
        let query = [("q", city.to_string())];
        self.fetch(&query, city)
    }

    /// Fetches and normalizes weather for coordinates.
    pub fn fetch_by_coords(&self, lat: f64, lon: f64) -> WeatherResult<WeatherData> {
        let query = [("lat", lat.to_string()), ("lon", lon.to_string())];
        self.fetch(&query, &format!("{lat},{lon}"))
    }

    fn fetch(&self, query: &[(&str, String)], target: &str) -> WeatherResult<WeatherData> {
        info!("event=weather_fetch module=weather status=start target={target}");
        let current: CurrentConditions = match self.get("weather", query) {
            Ok(current) => current,
            Err(err) => {
                error!("event=weather_fetch module=weather status=error target={target} error={err}");
                return Err(err);
            }
        };
        let forecast: ForecastResponse = match self.get("forecast", query) {
            Ok(forecast) => forecast,
            Err(err) => {
                error!("event=weather_fetch module=weather status=error target={target} error={err}");
                return Err(err);
            }
        };
        info!(
            "event=weather_fetch module=weather status=ok target={target} location={}",
            current.name
        );
        Ok(normalize(&current, &forecast.list))
    }

    fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> WeatherResult<T> {
        let response = self
            .http
            .get(format!("{}/{path}", self.base_url))
            .query(query)
            .query(&[("appid", self.api_key.as_str()), ("units", "metric")])
            .send()?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(WeatherError::CityNotFound),
            StatusCode::UNAUTHORIZED => Err(WeatherError::InvalidApiKey),
            StatusCode::TOO_MANY_REQUESTS => Err(WeatherError::RateLimited),
            status if !status.is_success() => Err(WeatherError::Status(status.as_u16())),
            _ => Ok(response.json::<T>()?),
        }
    }
}

fn validate_api_key(api_key: &str) -> WeatherResult<()> {
    if api_key.is_empty() {
        return Err(WeatherError::InvalidConfig(format!(
            "{API_KEY_ENV} is not set"
        )));
    }
    if api_key == PLACEHOLDER_KEY {
        return Err(WeatherError::InvalidConfig(format!(
            "{API_KEY_ENV} still holds the template placeholder"
        )));
    }
    if api_key.len() < 10 {
        return Err(WeatherError::InvalidConfig(format!(
            "{API_KEY_ENV} looks too short to be a real key"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_missing_key() {
        let err = WeatherClient::new("", DEFAULT_BASE_URL).unwrap_err();
        assert!(matches!(err, WeatherError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_placeholder_key() {
        let err = WeatherClient::new("your_api_key_here", DEFAULT_BASE_URL).unwrap_err();
        assert!(matches!(err, WeatherError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_short_key() {
        let err = WeatherClient::new("abc123", DEFAULT_BASE_URL).unwrap_err();
        assert!(matches!(err, WeatherError::InvalidConfig(_)));
    }

    #[test]
    fn accepts_plausible_key() {
        assert!(WeatherClient::new("0123456789abcdef", DEFAULT_BASE_URL).is_ok());
    }
}
