//! Pure, side-effect-free projections over store state.
//!
//! # Responsibility
//! - Filtering, sorting and counting without mutating the underlying list.
//!
//! # Invariants
//! - Calling any function here twice with the same inputs yields the same
//!   output; ties are broken deterministically on `order`.

pub mod todo_view;

pub use todo_view::{counts, filter_todos, natural_cmp, project, sort_todos};
