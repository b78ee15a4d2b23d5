//! Domain models shared across the daykit stores.
//!
//! # Responsibility
//! - Define the canonical records owned by the todo and cart stores.
//! - Define the normalized weather display shape.
//!
//! # Invariants
//! - Every timestamp is epoch milliseconds (`i64`); conversion to other
//!   representations happens only at external boundaries.
//! - Derived aggregate fields are never set directly by callers.

pub mod cart;
pub mod todo;
pub mod weather;

use std::time::{SystemTime, UNIX_EPOCH};

/// Current wall-clock time as epoch milliseconds.
///
/// Clamps to 0 if the system clock reports a pre-epoch time.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
