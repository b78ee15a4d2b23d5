//! Weather collaborator: provider payloads, normalization, HTTP client.
//!
//! # Responsibility
//! - Model the upstream provider's current/forecast payloads.
//! - Normalize them into the display shape in [`crate::model::weather`].
//! - Fetch by city name or coordinates with typed provider errors.
//!
//! # Invariants
//! - Normalization is pure; only the client performs I/O.
//! - Alert thresholds are fixed: >38° error/high, >35° warning/medium,
//!   <10° warning/medium, wind >15 km/h warning/medium, rain/storm
//!   keyword info/low.

pub mod client;
pub mod normalize;
pub mod provider;

pub use client::{WeatherClient, WeatherError, WeatherResult};
pub use normalize::{generate_alerts, normalize};
