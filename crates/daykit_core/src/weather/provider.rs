//! Upstream provider payload shapes (OpenWeatherMap).
//!
//! Only the fields normalization consumes are modeled; everything else in
//! the payload is ignored by serde.

use serde::Deserialize;

/// `/weather` response: current conditions at one location.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentConditions {
    pub name: String,
    pub sys: LocationMeta,
    pub main: CurrentReadings,
    pub weather: Vec<ConditionSummary>,
    pub wind: Wind,
    /// Metres; the provider omits it above 10 km.
    pub visibility: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocationMeta {
    #[serde(default)]
    pub country: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentReadings {
    /// Degrees Celsius (requested with metric units).
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u32,
    pub pressure: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConditionSummary {
    /// Coarse condition group, e.g. `Rain`.
    pub main: String,
    pub description: String,
    /// Provider icon code, e.g. `10d`.
    pub icon: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Wind {
    /// Metres per second.
    pub speed: f64,
}

/// `/forecast` response: 3-hour slots covering five days.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub list: Vec<ForecastEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastEntry {
    /// Slot start, epoch seconds.
    pub dt: i64,
    pub main: ForecastReadings,
    pub weather: Vec<ConditionSummary>,
    pub wind: Wind,
    /// Probability of precipitation, 0.0–1.0.
    #[serde(default)]
    pub pop: f64,
    #[serde(default)]
    pub rain: Option<RainVolume>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastReadings {
    pub temp: f64,
    pub humidity: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RainVolume {
    /// Millimetres over the slot's three hours.
    #[serde(rename = "3h", default)]
    pub three_hour: f64,
}
