//! Todo store: list lifecycle, derived views and persistence.
//!
//! # Responsibility
//! - Own the todo list and apply the named mutation set.
//! - Rehydrate from durable storage on open, upgrading legacy records.
//! - Mirror every successful mutation back to storage and notify listeners.
//!
//! # Invariants
//! - `order` values are unique for the process lifetime; the allocation
//!   counter seeds at `max(order) + 1` on open and never moves backwards.
//! - An empty list still overwrites the persisted snapshot.
//! - Storage failures never propagate out of a mutation.

use crate::model::todo::{
    migrate_stored, StoredTodo, Todo, TodoCounts, TodoFilter, TodoId, TodoSort, TodoStatus,
};
use crate::model::now_epoch_ms;
use crate::storage::KeyValueStore;
use crate::view;
use event_emitter_rs::EventEmitter;
use log::{error, info, warn};

const TODOS_KEY: &str = "todos";
const CHANGED_EVENT: &str = "todos_changed";

/// Owned, injectable todo state container.
///
/// Consumers hold a reference to one store; there is exactly one logical
/// writer, so no internal locking exists.
pub struct TodoStore<S: KeyValueStore> {
    storage: S,
    todos: Vec<Todo>,
    next_order: u64,
    emitter: EventEmitter,
}

impl<S: KeyValueStore> TodoStore<S> {
    /// Rehydrates the store from `storage`.
    ///
    /// Absent or malformed persisted data yields an empty list (logged),
    /// never a failure. Legacy boolean-`completed` records are upgraded once
    /// here, before the list is used.
    pub fn open(storage: S) -> Self {
        let todos = load_todos(&storage);
        let next_order = todos.iter().map(|todo| todo.order).max().unwrap_or(0) + 1;
        info!(
            "event=todo_store_open module=todo_store status=ok count={} next_order={next_order}",
            todos.len()
        );
        Self {
            storage,
            todos,
            next_order,
            emitter: EventEmitter::new(),
        }
    }

    /// Adds a todo to the front of the list.
    ///
    /// Returns `None` without mutating anything when `text` trims to empty.
    pub fn add(&mut self, text: &str, expected_completion: Option<i64>) -> Option<Todo> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        let todo = Todo::new(trimmed, expected_completion, self.next_order, now_epoch_ms());
        self.next_order += 1;
        self.todos.insert(0, todo.clone());
        self.committed();
        Some(todo)
    }

    /// Updates `text` and `expected_completion` of an existing todo.
    ///
    /// No-op when the id is unknown or the new text trims to empty. Status
    /// is deliberately untouched.
    pub fn edit(&mut self, id: TodoId, new_text: &str, expected_completion: Option<i64>) {
        let trimmed = new_text.trim();
        if trimmed.is_empty() {
            return;
        }
        let Some(todo) = self.todos.iter_mut().find(|todo| todo.id == id) else {
            return;
        };
        todo.text = trimmed.to_string();
        todo.expected_completion = expected_completion;
        self.committed();
    }

    /// Moves a todo to `status`, stamping or clearing `completed_at` on the
    /// edges of the `Completed` state. No-op when the id is unknown.
    pub fn set_status(&mut self, id: TodoId, status: TodoStatus) {
        let Some(todo) = self.todos.iter_mut().find(|todo| todo.id == id) else {
            return;
        };
        todo.transition(status, now_epoch_ms());
        self.committed();
    }

    /// Legacy convenience: flips between `Completed` and `Pending` only.
    pub fn toggle_complete(&mut self, id: TodoId) {
        let Some(todo) = self.todos.iter().find(|todo| todo.id == id) else {
            return;
        };
        let next = if todo.status == TodoStatus::Completed {
            TodoStatus::Pending
        } else {
            TodoStatus::Completed
        };
        self.set_status(id, next);
    }

    /// Stages or unstages a todo for bulk delete. No-op when unknown.
    pub fn set_selected(&mut self, id: TodoId, selected: bool) {
        let Some(todo) = self.todos.iter_mut().find(|todo| todo.id == id) else {
            return;
        };
        todo.selected = selected;
        self.committed();
    }

    /// Deletes one todo. No-op when the id is unknown; confirmation belongs
    /// to the caller, not the store.
    pub fn remove(&mut self, id: TodoId) {
        let before = self.todos.len();
        self.todos.retain(|todo| todo.id != id);
        if self.todos.len() != before {
            self.committed();
        }
    }

    /// Deletes every staged todo, returning how many were removed.
    pub fn remove_selected(&mut self) -> usize {
        let before = self.todos.len();
        self.todos.retain(|todo| !todo.selected);
        let removed = before - self.todos.len();
        if removed > 0 {
            self.committed();
        }
        removed
    }

    /// Pure filtered/sorted projection of the current list.
    pub fn project(&self, filter: TodoFilter, sort: TodoSort) -> Vec<Todo> {
        view::project(&self.todos, filter, sort)
    }

    /// Per-status tally over the full list.
    pub fn counts(&self) -> TodoCounts {
        view::counts(&self.todos)
    }

    /// Storage-ordered snapshot (newest-created first).
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Number of todos currently staged for bulk delete.
    pub fn selected_count(&self) -> usize {
        self.todos.iter().filter(|todo| todo.selected).count()
    }

    /// Registers a listener fired after every successful mutation with the
    /// serialized counts as payload. Returns a listener id.
    pub fn on_change<F>(&mut self, listener: F) -> String
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.emitter.on(CHANGED_EVENT, listener)
    }

    /// Unregisters a listener returned by [`Self::on_change`].
    pub fn remove_listener(&mut self, listener_id: &str) {
        self.emitter.remove_listener(listener_id);
    }

    /// Persist-then-notify tail shared by every successful mutation.
    fn committed(&mut self) {
        self.persist();
        let payload =
            serde_json::to_string(&self.counts()).unwrap_or_else(|_| "{}".to_string());
        self.emitter.emit(CHANGED_EVENT, payload);
    }

    /// Mirrors the full list to storage. Fire-and-forget: failures are
    /// logged and the in-memory state stays authoritative.
    fn persist(&self) {
        let json = match serde_json::to_string(&self.todos) {
            Ok(json) => json,
            Err(err) => {
                error!("event=todo_save module=todo_store status=error error={err}");
                return;
            }
        };
        if let Err(err) = self.storage.set(TODOS_KEY, &json) {
            error!("event=todo_save module=todo_store status=error error={err}");
        }
    }
}

fn load_todos<S: KeyValueStore>(storage: &S) -> Vec<Todo> {
    let raw = match storage.get(TODOS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(err) => {
            error!("event=todo_load module=todo_store status=error error={err}");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<StoredTodo>>(&raw) {
        Ok(records) => records
            .into_iter()
            .enumerate()
            .map(|(position, record)| migrate_stored(record, position))
            .collect(),
        Err(err) => {
            warn!("event=todo_load module=todo_store status=corrupt error={err}");
            Vec::new()
        }
    }
}
