//! Core use-case services.
//!
//! # Responsibility
//! - Turn repository primitives into store-level operations.
//! - Keep callers decoupled from storage details.

pub mod todo_store;
