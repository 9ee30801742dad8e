//! Todo repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Hold the ordered item sequence behind a storage seam.
//! - Provide the next-id policy over whatever a repository currently holds.
//!
//! # Invariants
//! - `append` never reorders; insertion order is list order.
//! - Seeded repositories contain only valid, pairwise-distinct ids.
//! - `MAX_SEED_ID` bounds accepted ids, so `next_id` cannot run out while
//!   items are only added one at a time.

use crate::model::todo_item::{TodoId, TodoItem, TodoValidationError};
use std::collections::HashSet;

/// Storage interface for the todo store.
pub trait TodoRepository {
    /// All items in insertion order.
    fn items(&self) -> &[TodoItem];
    /// Pushes one item to the end of the sequence.
    fn append(&mut self, item: TodoItem);
}

/// `Vec`-backed repository. Lives for the process only.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoRepository {
    items: Vec<TodoItem>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts seed items after `validate_items`.
    pub fn try_from_items(items: Vec<TodoItem>) -> Result<Self, TodoValidationError> {
        validate_items(&items)?;
        Ok(Self { items })
    }
}

impl TodoRepository for InMemoryTodoRepository {
    fn items(&self) -> &[TodoItem] {
        &self.items
    }

    fn append(&mut self, item: TodoItem) {
        self.items.push(item);
    }
}

/// Checks items a store is about to take ownership of.
///
/// # Errors
/// - `InvalidId` for an id of `0` or above `MAX_SEED_ID`.
/// - `DuplicateId` for the first id seen twice.
pub fn validate_items(items: &[TodoItem]) -> Result<(), TodoValidationError> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        item.validate()?;
        if !seen.insert(item.id) {
            return Err(TodoValidationError::DuplicateId(item.id));
        }
    }
    Ok(())
}

/// Returns one more than the largest id in `items`, or `1` when empty.
///
/// Scans the current items every time rather than tracking a counter, so the
/// result follows the live maximum. `None` when the maximum is `TodoId::MAX`.
pub fn next_id(items: &[TodoItem]) -> Option<TodoId> {
    items
        .iter()
        .map(|item| item.id)
        .max()
        .unwrap_or(0)
        .checked_add(1)
}
