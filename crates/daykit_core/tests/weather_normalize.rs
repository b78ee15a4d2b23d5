use daykit_core::weather::normalize::{
    daily_forecast, generate_alerts, hourly_forecast, icon_emoji, normalize, rain_outlook,
};
use daykit_core::weather::provider::{CurrentConditions, ForecastEntry, ForecastResponse};
use daykit_core::{AlertKind, Urgency};

fn current_json(temp: f64, wind_ms: f64, description: &str) -> CurrentConditions {
    serde_json::from_value(serde_json::json!({
        "name": "Hanoi",
        "sys": { "country": "VN" },
        "main": { "temp": temp, "feels_like": temp + 1.0, "humidity": 70, "pressure": 1012.0 },
        "weather": [{ "main": "Clouds", "description": description, "icon": "02d" }],
        "wind": { "speed": wind_ms },
        "visibility": 8000
    }))
    .unwrap()
}

fn slot(dt: i64, temp: f64, pop: f64) -> serde_json::Value {
    serde_json::json!({
        "dt": dt,
        "main": { "temp": temp, "humidity": 60 },
        "weather": [{ "main": "Clear", "description": "clear sky", "icon": "01d" }],
        "wind": { "speed": 2.0 },
        "pop": pop
    })
}

fn forecast_slots(values: Vec<serde_json::Value>) -> Vec<ForecastEntry> {
    let response: ForecastResponse =
        serde_json::from_value(serde_json::json!({ "list": values })).unwrap();
    response.list
}

const DAY: i64 = 86_400;
const BASE: i64 = 1_700_006_400; // 2023-11-15 00:00:00 UTC

#[test]
fn extreme_heat_is_an_error_with_high_urgency() {
    let alerts = generate_alerts(39.0, 5.0, "clear sky");
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].kind, AlertKind::Error);
    assert_eq!(alerts[0].urgency, Urgency::High);
}

#[test]
fn heat_cold_and_wind_thresholds() {
    let heat = generate_alerts(36.0, 5.0, "clear sky");
    assert_eq!(heat[0].kind, AlertKind::Warning);
    assert_eq!(heat[0].urgency, Urgency::Medium);

    let cold = generate_alerts(9.0, 5.0, "clear sky");
    assert_eq!(cold[0].kind, AlertKind::Warning);

    let wind = generate_alerts(20.0, 16.0, "clear sky");
    assert_eq!(wind.len(), 1);
    assert_eq!(wind[0].kind, AlertKind::Warning);

    assert!(generate_alerts(20.0, 15.0, "clear sky").is_empty(), "boundaries are exclusive");
    assert!(generate_alerts(35.0, 5.0, "clear sky").is_empty());
    assert!(generate_alerts(10.0, 5.0, "clear sky").is_empty());
}

#[test]
fn rain_keyword_adds_an_info_notice() {
    let alerts = generate_alerts(25.0, 5.0, "light rain");
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].kind, AlertKind::Info);
    assert_eq!(alerts[0].urgency, Urgency::Low);

    let stormy = generate_alerts(25.0, 5.0, "Thunderstorm"); // "storm" substring
    assert_eq!(stormy.len(), 1);
    assert_eq!(stormy[0].kind, AlertKind::Info);
}

#[test]
fn alerts_stack_when_several_thresholds_trip() {
    let alerts = generate_alerts(39.0, 20.0, "heavy rain");
    let kinds: Vec<AlertKind> = alerts.iter().map(|alert| alert.kind).collect();
    assert_eq!(kinds, [AlertKind::Error, AlertKind::Warning, AlertKind::Info]);
}

#[test]
fn daily_forecast_caps_at_five_days_with_bucket_extremes() {
    let mut slots = Vec::new();
    for day in 0..7 {
        for step in 0..4 {
            slots.push(slot(
                BASE + day * DAY + step * 3 * 3_600,
                20.0 + step as f64,
                0.1 * step as f64,
            ));
        }
    }
    let daily = daily_forecast(&forecast_slots(slots));

    assert_eq!(daily.len(), 5);
    assert_eq!(daily[0].day, "Today");
    assert_eq!(daily[1].day, "Tomorrow");
    assert_eq!(daily[0].high, 23);
    assert_eq!(daily[0].low, 20);
    assert_eq!(daily[0].rain_chance, 30, "max pop of the bucket");
}

#[test]
fn hourly_forecast_caps_at_eight_slots_and_marks_now() {
    let slots: Vec<serde_json::Value> = (0..12)
        .map(|step| slot(BASE + step * 3 * 3_600, 22.0, 0.0))
        .collect();
    let hourly = hourly_forecast(&forecast_slots(slots));

    assert_eq!(hourly.len(), 8);
    assert!(hourly[0].is_now);
    assert_eq!(hourly[0].time, "Now");
    assert!(!hourly[1].is_now);
    assert!(hourly[1].time.ends_with(":00"));
}

#[test]
fn rain_outlook_sums_reported_volume_and_estimates_the_rest() {
    let mut values = vec![
        serde_json::json!({
            "dt": BASE,
            "main": { "temp": 20.0, "humidity": 80 },
            "weather": [{ "main": "Rain", "description": "light rain", "icon": "10d" }],
            "wind": { "speed": 3.0 },
            "pop": 0.9,
            "rain": { "3h": 4.0 }
        }),
        slot(BASE + 3 * 3_600, 20.0, 0.5), // no volume, pop > 0.3 -> 1.0 mm estimate
        slot(BASE + 6 * 3_600, 20.0, 0.2), // below estimate cutoff
    ];
    values.extend((3..10).map(|step| slot(BASE + step * 3 * 3_600, 20.0, 0.0)));

    let (chance, amount) = rain_outlook(&forecast_slots(values));
    assert_eq!(chance, 90);
    assert_eq!(amount, 5);
}

#[test]
fn normalize_converts_units_and_assembles_the_display_shape() {
    let current = current_json(27.6, 5.0, "scattered clouds");
    let slots: Vec<serde_json::Value> = (0..8)
        .map(|step| slot(BASE + step * 3 * 3_600, 24.0, 0.0))
        .collect();
    let data = normalize(&current, &forecast_slots(slots));

    assert_eq!(data.location, "Hanoi");
    assert_eq!(data.country, "VN");
    assert_eq!(data.temperature, 28);
    assert_eq!(data.wind_speed, 18, "5 m/s is 18 km/h");
    assert_eq!(data.visibility, 8, "8000 m is 8 km");
    assert_eq!(data.feels_like, 29);
    assert_eq!(data.icon, "⛅");
    assert_eq!(data.hourly.len(), 8);
    assert!(data.forecast.len() <= 5);
    assert_eq!(
        data.alerts.len(),
        1,
        "18 km/h wind crosses the 15 km/h threshold"
    );
}

#[test]
fn missing_visibility_defaults_to_ten_km() {
    let current: CurrentConditions = serde_json::from_value(serde_json::json!({
        "name": "Hanoi",
        "sys": { "country": "VN" },
        "main": { "temp": 25.0, "feels_like": 25.0, "humidity": 70, "pressure": 1012.0 },
        "weather": [{ "main": "Clear", "description": "clear sky", "icon": "01d" }],
        "wind": { "speed": 1.0 }
    }))
    .unwrap();

    let data = normalize(&current, &[]);
    assert_eq!(data.visibility, 10);
    assert!(data.forecast.is_empty());
    assert!(data.hourly.is_empty());
}

#[test]
fn unknown_icon_codes_fall_back() {
    assert_eq!(icon_emoji("01d"), "☀️");
    assert_eq!(icon_emoji("11n"), "⛈️");
    assert_eq!(icon_emoji("99z"), "🌤️");
}
