//! Repository layer for todo items.
//!
//! # Responsibility
//! - Define the storage contract used by the store service.
//! - Keep the next-id policy next to the data it scans.

pub mod todo_repo;
