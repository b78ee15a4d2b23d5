//! Core logic for the daykit demo app: todo list, shopping cart, weather.
//! This crate is the single source of truth for business invariants; the
//! presentation layer only dispatches intents and renders projections.

pub mod catalog;
pub mod logging;
pub mod model;
pub mod storage;
pub mod store;
pub mod view;
pub mod weather;

pub use catalog::Catalog;
pub use logging::{default_log_level, init_logging};
pub use model::cart::{CartItem, CartSummary, Product};
pub use model::todo::{Todo, TodoCounts, TodoFilter, TodoId, TodoSort, TodoStatus};
pub use model::weather::{AlertKind, Urgency, WeatherAlert, WeatherData};
pub use storage::{
    open_store, open_store_in_memory, KeyValueStore, SqliteKeyValueStore, StorageError,
    StorageResult,
};
pub use store::{CartStore, TodoStore};
pub use weather::{WeatherClient, WeatherError, WeatherResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
