//! Todo store use-case service.
//!
//! # Responsibility
//! - Assign ids and append new items through a repository.
//! - Accept explicit seed input at construction.
//!
//! # Invariants
//! - A new id is strictly greater than every id present before the call.
//! - `add_item` appends exactly one item and touches nothing else.

use crate::model::todo_item::{TodoItem, TodoValidationError};
use crate::repo::todo_repo::{next_id, validate_items, InMemoryTodoRepository, TodoRepository};
use log::{debug, info};

/// Owner of the ordered todo item sequence.
#[derive(Debug, Clone)]
pub struct TodoStore<R: TodoRepository = InMemoryTodoRepository> {
    repo: R,
}

impl<R: TodoRepository> TodoStore<R> {
    /// Wraps an existing repository after checking the items it already holds.
    ///
    /// # Errors
    /// - Returns `TodoValidationError` when an id is out of range or repeated.
    pub fn new(repo: R) -> Result<Self, TodoValidationError> {
        validate_items(repo.items())?;
        Ok(Self { repo })
    }

    /// Appends a new `Todo` item and returns a copy of it.
    ///
    /// # Contract
    /// - Id is `max(existing ids) + 1`, or `1` for an empty store.
    /// - Status is `TodoStatus::Todo` and `completed_on` is `None`.
    /// - `title` is stored verbatim; empty strings are accepted.
    ///
    /// # Panics
    /// - Only if the id space is exhausted, which needs about `2^64 - 2^53`
    ///   appends after a seed capped at `MAX_SEED_ID`.
    pub fn add_item(&mut self, title: impl Into<String>) -> TodoItem {
        let id = next_id(self.repo.items()).expect("todo id space exhausted");
        let item = TodoItem::new(id, title);
        self.repo.append(item.clone());

        debug!(
            "event=item_added module=store status=ok id={} title_len={}",
            item.id,
            item.title.chars().count()
        );
        item
    }

    /// All items in insertion order.
    pub fn items(&self) -> &[TodoItem] {
        self.repo.items()
    }

    pub fn len(&self) -> usize {
        self.repo.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.items().is_empty()
    }
}

impl TodoStore<InMemoryTodoRepository> {
    /// Empty in-memory store.
    pub fn in_memory() -> Self {
        Self {
            repo: InMemoryTodoRepository::new(),
        }
    }

    /// Builds an in-memory store from seed items, kept in the given order.
    ///
    /// # Errors
    /// - Returns `TodoValidationError` when an id is out of range or repeated.
    pub fn with_items(seed: Vec<TodoItem>) -> Result<Self, TodoValidationError> {
        let repo = InMemoryTodoRepository::try_from_items(seed)?;
        info!(
            "event=store_seeded module=store status=ok items={}",
            repo.items().len()
        );
        Ok(Self { repo })
    }
}

impl Default for TodoStore<InMemoryTodoRepository> {
    fn default() -> Self {
        Self::in_memory()
    }
}
