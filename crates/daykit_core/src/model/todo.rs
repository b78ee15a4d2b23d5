//! Todo domain model and persisted record shapes.
//!
//! # Responsibility
//! - Define the canonical `Todo` record and its lifecycle states.
//! - Define the versioned stored-record union used when rehydrating from
//!   durable storage, including the legacy boolean-`completed` shape.
//!
//! # Invariants
//! - `id` is stable and never reused for another todo.
//! - `order` values are unique within one store for the process lifetime.
//! - `completed_at` is set exactly when `status == Completed`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a todo.
pub type TodoId = Uuid;

/// Lifecycle state of a todo. Any state may transition to any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TodoStatus {
    /// Created but not started.
    Pending,
    /// Work has begun.
    InProgress,
    /// Finished; `completed_at` records when.
    Completed,
}

/// Canonical todo record owned by the todo store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Stable ID assigned at creation.
    pub id: TodoId,
    /// Non-empty user text.
    pub text: String,
    pub status: TodoStatus,
    /// Epoch milliseconds, set once at creation.
    pub created_at: i64,
    /// Epoch milliseconds; present exactly while `status == Completed`.
    pub completed_at: Option<i64>,
    /// Optional user-set target date, epoch milliseconds.
    pub expected_completion: Option<i64>,
    /// Strictly increasing allocation counter, unique per store.
    pub order: u64,
    /// Staging flag for bulk delete; no effect on any other field.
    #[serde(default)]
    pub selected: bool,
}

impl Todo {
    /// Creates a pending todo with a fresh stable ID.
    pub fn new(
        text: impl Into<String>,
        expected_completion: Option<i64>,
        order: u64,
        created_at: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            status: TodoStatus::Pending,
            created_at,
            completed_at: None,
            expected_completion,
            order,
            selected: false,
        }
    }

    /// Applies a status change with edge-triggered `completed_at` stamping.
    ///
    /// Entering `Completed` stamps `completed_at = now`; leaving it clears
    /// the stamp. A same-status call changes nothing.
    pub fn transition(&mut self, status: TodoStatus, now: i64) {
        if status == self.status {
            return;
        }
        if status == TodoStatus::Completed {
            self.completed_at = Some(now);
        } else if self.status == TodoStatus::Completed {
            self.completed_at = None;
        }
        self.status = status;
    }
}

/// Filter applied by [`crate::view::project`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TodoFilter {
    All,
    Pending,
    InProgress,
    Completed,
}

/// Sort order applied by [`crate::view::project`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TodoSort {
    Newest,
    Oldest,
    Alphabetical,
    ReverseAlphabetical,
}

/// Per-status tally over the full list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoCounts {
    pub all: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
}

/// Versioned persisted record.
///
/// Current records carry `status`; records written before the status
/// lifecycle existed carry a boolean `completed` instead and are upgraded
/// exactly once during load by [`migrate_stored`].
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum StoredTodo {
    Current(CurrentTodoRecord),
    Legacy(LegacyTodoRecord),
}

/// Current on-disk shape. `order` stays optional so records written before
/// explicit ordering can be backfilled from list position.
#[derive(Debug, Deserialize)]
pub struct CurrentTodoRecord {
    pub id: TodoId,
    pub text: String,
    pub status: TodoStatus,
    pub created_at: i64,
    #[serde(default)]
    pub completed_at: Option<i64>,
    #[serde(default)]
    pub expected_completion: Option<i64>,
    #[serde(default)]
    pub order: Option<u64>,
    #[serde(default)]
    pub selected: bool,
}

/// Pre-status on-disk shape with a boolean done flag.
#[derive(Debug, Deserialize)]
pub struct LegacyTodoRecord {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
    pub created_at: i64,
    #[serde(default)]
    pub expected_completion: Option<i64>,
    #[serde(default)]
    pub order: Option<u64>,
}

/// Pure upgrade from a stored record to the canonical shape.
///
/// `position` is the zero-based list index, used to backfill a missing
/// `order` as `position + 1`. Legacy done todos get `completed_at` defaulted
/// to `created_at` since no better timestamp survived.
pub fn migrate_stored(record: StoredTodo, position: usize) -> Todo {
    let fallback_order = position as u64 + 1;
    match record {
        StoredTodo::Current(current) => Todo {
            id: current.id,
            text: current.text,
            status: current.status,
            created_at: current.created_at,
            completed_at: current.completed_at,
            expected_completion: current.expected_completion,
            order: current.order.unwrap_or(fallback_order),
            selected: current.selected,
        },
        StoredTodo::Legacy(legacy) => {
            let (status, completed_at) = if legacy.completed {
                (TodoStatus::Completed, Some(legacy.created_at))
            } else {
                (TodoStatus::Pending, None)
            };
            Todo {
                id: legacy.id,
                text: legacy.text,
                status,
                created_at: legacy.created_at,
                completed_at,
                expected_completion: legacy.expected_completion,
                order: legacy.order.unwrap_or(fallback_order),
                selected: false,
            }
        }
    }
}
