//! Core domain logic for the in-memory todo store.
//! This crate is the single source of truth for todo id invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod seed;
pub mod service;

pub use config::{ConfigError, LogConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::todo_item::{TodoId, TodoItem, TodoStatus, TodoValidationError, MAX_SEED_ID};
pub use repo::todo_repo::{next_id, validate_items, InMemoryTodoRepository, TodoRepository};
pub use seed::default_items;
pub use service::todo_store::TodoStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
