//! Domain model for the todo store.
//!
//! # Invariants
//! - Every item is identified by a store-assigned positive `TodoId`.
//! - Items are never mutated or removed once stored.

pub mod todo_item;
