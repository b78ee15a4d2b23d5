//! Pure normalization from provider payloads to the display shape.
//!
//! # Responsibility
//! - Unit conversion (m/s → km/h, m → km), rounding, bucketing.
//! - Advisory generation from fixed thresholds.
//!
//! # Invariants
//! - At most 5 daily and 8 hourly entries are produced.
//! - No I/O; everything here is deterministic for a given payload.

use crate::model::weather::{
    AlertKind, DailyForecast, HourlyForecast, Urgency, WeatherAlert, WeatherData,
};
use crate::weather::provider::{CurrentConditions, ForecastEntry};
use chrono::{DateTime, Datelike, NaiveDate, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;

static RAIN_KEYWORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)rain|storm").expect("valid rain keyword regex"));

/// Visibility reported when the provider omits the field, metres.
const DEFAULT_VISIBILITY_M: u32 = 10_000;
/// Short-interval window: 8 slots of 3 hours = 24 hours.
const HOURLY_SLOTS: usize = 8;
const DAILY_SLOTS: usize = 5;

/// Builds the full display shape from one current payload and its forecast.
pub fn normalize(current: &CurrentConditions, forecast: &[ForecastEntry]) -> WeatherData {
    let condition = current.weather.first();
    let description = condition.map(|c| c.description.clone()).unwrap_or_default();
    let icon_code = condition.map(|c| c.icon.as_str()).unwrap_or_default();
    let wind_kmh = kmh(current.wind.speed);
    let (rain_chance, rain_amount) = rain_outlook(forecast);

    WeatherData {
        location: current.name.clone(),
        country: current.sys.country.clone(),
        temperature: current.main.temp.round() as i32,
        description: description.clone(),
        humidity: current.main.humidity,
        wind_speed: wind_kmh,
        pressure: current.main.pressure.round() as u32,
        visibility: (f64::from(current.visibility.unwrap_or(DEFAULT_VISIBILITY_M)) / 1000.0)
            .round() as i32,
        feels_like: current.main.feels_like.round() as i32,
        icon: icon_emoji(icon_code).to_string(),
        rain_chance,
        rain_amount,
        forecast: daily_forecast(forecast),
        hourly: hourly_forecast(forecast),
        alerts: generate_alerts(current.main.temp, f64::from(wind_kmh), &description),
    }
}

/// Generates advisories from current readings.
///
/// Thresholds: temp > 38° error/high, > 35° warning/medium, < 10°
/// warning/medium; wind > 15 km/h warning/medium; a rain/storm keyword in
/// the description adds an info/low notice.
pub fn generate_alerts(temp_c: f64, wind_kmh: f64, description: &str) -> Vec<WeatherAlert> {
    let mut alerts = Vec::new();

    if temp_c > 38.0 {
        alerts.push(WeatherAlert {
            kind: AlertKind::Error,
            title: "Extreme heat warning".to_string(),
            description: "Very high temperatures; avoid the outdoors between 10:00 and 16:00, \
                          drink plenty of water and stay in the shade."
                .to_string(),
            urgency: Urgency::High,
        });
    } else if temp_c > 35.0 {
        alerts.push(WeatherAlert {
            kind: AlertKind::Warning,
            title: "Heat warning".to_string(),
            description: "High temperatures; limit outdoor activity around midday.".to_string(),
            urgency: Urgency::Medium,
        });
    } else if temp_c < 10.0 {
        alerts.push(WeatherAlert {
            kind: AlertKind::Warning,
            title: "Cold warning".to_string(),
            description: "Low temperatures; dress warmly and take care of your health."
                .to_string(),
            urgency: Urgency::Medium,
        });
    }

    if wind_kmh > 15.0 {
        alerts.push(WeatherAlert {
            kind: AlertKind::Warning,
            title: "Strong wind warning".to_string(),
            description: "High wind speeds; take care when travelling and avoid unstable \
                          objects."
                .to_string(),
            urgency: Urgency::Medium,
        });
    }

    if RAIN_KEYWORD_RE.is_match(description) {
        alerts.push(WeatherAlert {
            kind: AlertKind::Info,
            title: "Rain expected".to_string(),
            description: "Rain is likely; bring an umbrella and take care on the road."
                .to_string(),
            urgency: Urgency::Low,
        });
    }

    alerts
}

/// Groups 3-hour slots by calendar date into at most 5 daily entries.
pub fn daily_forecast(forecast: &[ForecastEntry]) -> Vec<DailyForecast> {
    struct DayBucket {
        date: NaiveDate,
        temps: Vec<f64>,
        condition: String,
        icon: String,
        max_pop: f64,
    }

    let mut buckets: Vec<DayBucket> = Vec::new();
    for entry in forecast {
        let Some(moment) = DateTime::from_timestamp(entry.dt, 0) else {
            continue;
        };
        let date = moment.date_naive();
        let condition = entry.weather.first();

        match buckets.last_mut().filter(|bucket| bucket.date == date) {
            Some(bucket) => {
                bucket.temps.push(entry.main.temp);
                bucket.max_pop = bucket.max_pop.max(entry.pop);
            }
            None => buckets.push(DayBucket {
                date,
                temps: vec![entry.main.temp],
                condition: condition.map(|c| c.main.clone()).unwrap_or_default(),
                icon: condition.map(|c| c.icon.clone()).unwrap_or_default(),
                max_pop: entry.pop,
            }),
        }
    }

    buckets
        .into_iter()
        .take(DAILY_SLOTS)
        .enumerate()
        .map(|(index, bucket)| DailyForecast {
            day: match index {
                0 => "Today".to_string(),
                1 => "Tomorrow".to_string(),
                _ => weekday_label(bucket.date),
            },
            high: bucket
                .temps
                .iter()
                .copied()
                .fold(f64::NEG_INFINITY, f64::max)
                .round() as i32,
            low: bucket
                .temps
                .iter()
                .copied()
                .fold(f64::INFINITY, f64::min)
                .round() as i32,
            rain_chance: (bucket.max_pop * 100.0).round() as u32,
            condition: bucket.condition,
            icon: icon_emoji(&bucket.icon).to_string(),
        })
        .collect()
}

/// The first 8 three-hour slots; the leading one is labeled `Now`.
pub fn hourly_forecast(forecast: &[ForecastEntry]) -> Vec<HourlyForecast> {
    forecast
        .iter()
        .take(HOURLY_SLOTS)
        .enumerate()
        .map(|(index, entry)| {
            let hour = DateTime::from_timestamp(entry.dt, 0)
                .map(|moment| moment.hour())
                .unwrap_or(0);
            let condition = entry.weather.first();
            HourlyForecast {
                time: if index == 0 {
                    "Now".to_string()
                } else {
                    format!("{hour:02}:00")
                },
                hour,
                temperature: entry.main.temp.round() as i32,
                condition: condition.map(|c| c.main.clone()).unwrap_or_default(),
                rain_chance: (entry.pop * 100.0).round() as u32,
                wind_speed: kmh(entry.wind.speed),
                humidity: entry.main.humidity,
                icon: condition
                    .map(|c| icon_emoji(&c.icon))
                    .unwrap_or("🌤️")
                    .to_string(),
                is_now: index == 0,
            }
        })
        .collect()
}

/// Max rain probability (percent) and estimated volume (mm) over the next
/// 24 hours. Slots without a reported volume but with pop above 0.3
/// contribute an estimate of `pop × 2` millimetres.
pub fn rain_outlook(forecast: &[ForecastEntry]) -> (u32, u32) {
    let window = &forecast[..forecast.len().min(HOURLY_SLOTS)];

    let max_pop = window.iter().map(|entry| entry.pop).fold(0.0, f64::max);

    let mut total_mm = 0.0;
    for entry in window {
        match &entry.rain {
            Some(rain) if rain.three_hour > 0.0 => total_mm += rain.three_hour,
            _ if entry.pop > 0.3 => total_mm += entry.pop * 2.0,
            _ => {}
        }
    }

    ((max_pop * 100.0).round() as u32, total_mm.round() as u32)
}

/// Maps a provider icon code to a display emoji, `🌤️` when unknown.
pub fn icon_emoji(code: &str) -> &'static str {
    match code {
        "01d" => "☀️",
        "01n" => "🌙",
        "02d" => "⛅",
        "02n" | "03d" | "03n" | "04d" | "04n" => "☁️",
        "09d" | "09n" | "10n" => "🌧️",
        "10d" => "🌦️",
        "11d" | "11n" => "⛈️",
        "13d" | "13n" => "❄️",
        "50d" | "50n" => "🌫️",
        _ => "🌤️",
    }
}

fn weekday_label(date: NaiveDate) -> String {
    // chrono's %a formatting pulls in locale machinery; the fixed English
    // short names are enough for the display labels.
    match date.weekday() {
        chrono::Weekday::Mon => "Mon",
        chrono::Weekday::Tue => "Tue",
        chrono::Weekday::Wed => "Wed",
        chrono::Weekday::Thu => "Thu",
        chrono::Weekday::Fri => "Fri",
        chrono::Weekday::Sat => "Sat",
        chrono::Weekday::Sun => "Sun",
    }
    .to_string()
}

fn kmh(metres_per_second: f64) -> i32 {
    (metres_per_second * 3.6).round() as i32
}
