//! Normalized weather display shape.
//!
//! # Responsibility
//! - Define the fixed shape the weather page renders, independent of the
//!   upstream provider's payload layout.
//!
//! # Invariants
//! - Temperatures are degrees Celsius, wind km/h, visibility km.
//! - `forecast` holds at most 5 daily entries; `hourly` at most 8
//!   three-hour entries.

use serde::{Deserialize, Serialize};

/// Advisory severity class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Info,
    Warning,
    Error,
}

/// How urgently the advisory should be surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

/// One generated weather advisory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherAlert {
    pub kind: AlertKind,
    pub title: String,
    pub description: String,
    pub urgency: Urgency,
}

/// One day of the 5-day outlook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    /// Display label: `Today`, `Tomorrow`, or a short weekday name.
    pub day: String,
    pub high: i32,
    pub low: i32,
    pub condition: String,
    /// Percent 0–100.
    pub rain_chance: u32,
    pub icon: String,
}

/// One 3-hour slot of the short-interval outlook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyForecast {
    /// Display label: `Now` for the leading slot, else `HH:00`.
    pub time: String,
    pub hour: u32,
    pub temperature: i32,
    pub condition: String,
    pub rain_chance: u32,
    pub wind_speed: i32,
    pub humidity: u32,
    pub icon: String,
    pub is_now: bool,
}

/// Everything the weather page needs, in display units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherData {
    pub location: String,
    pub country: String,
    pub temperature: i32,
    pub description: String,
    pub humidity: u32,
    pub wind_speed: i32,
    pub pressure: u32,
    pub visibility: i32,
    pub feels_like: i32,
    pub icon: String,
    /// Max precipitation probability over the next 24h, percent.
    pub rain_chance: u32,
    /// Estimated rain volume over the next 24h, millimetres.
    pub rain_amount: u32,
    pub forecast: Vec<DailyForecast>,
    pub hourly: Vec<HourlyForecast>,
    pub alerts: Vec<WeatherAlert>,
}
