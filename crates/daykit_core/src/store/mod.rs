//! Owned state containers mutated through a fixed operation set.
//!
//! # Responsibility
//! - Validate and apply caller intents, recompute derived fields, persist a
//!   snapshot, then notify subscribers.
//!
//! # Invariants
//! - A rejected operation leaves state byte-for-byte unchanged.
//! - Persistence failures are logged and never surface to the caller.
//! - Stores never call each other.

pub mod cart_store;
pub mod todo_store;

pub use cart_store::CartStore;
pub use todo_store::TodoStore;
