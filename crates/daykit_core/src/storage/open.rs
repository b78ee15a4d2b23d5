//! Connection bootstrap for the key-value store.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections.
//! - Run schema migrations before returning a usable store.
//!
//! # Invariants
//! - Returned stores have all migrations applied.

use super::kv::SqliteKeyValueStore;
use super::migrations::apply_migrations;
use super::StorageResult;
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::Instant;

/// Opens a storage file and applies all pending migrations.
pub fn open_store(path: impl AsRef<Path>) -> StorageResult<SqliteKeyValueStore> {
    let started_at = Instant::now();
    info!("event=storage_open module=storage status=start mode=file");
    bootstrap(Connection::open(path), started_at, "file")
}

/// Opens an in-memory store, mainly for tests and smoke probes.
pub fn open_store_in_memory() -> StorageResult<SqliteKeyValueStore> {
    let started_at = Instant::now();
    info!("event=storage_open module=storage status=start mode=memory");
    bootstrap(Connection::open_in_memory(), started_at, "memory")
}

fn bootstrap(
    opened: Result<Connection, rusqlite::Error>,
    started_at: Instant,
    mode: &str,
) -> StorageResult<SqliteKeyValueStore> {
    let mut conn = match opened {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=storage_open module=storage status=error mode={mode} duration_ms={} error={err}",
                started_at.elapsed().as_millis()
            );
            return Err(err.into());
        }
    };

    if let Err(err) = apply_migrations(&mut conn) {
        error!(
            "event=storage_open module=storage status=error mode={mode} duration_ms={} error={err}",
            started_at.elapsed().as_millis()
        );
        return Err(err);
    }

    info!(
        "event=storage_open module=storage status=ok mode={mode} duration_ms={}",
        started_at.elapsed().as_millis()
    );
    Ok(SqliteKeyValueStore::new(conn))
}
