//! Todo item domain model.
//!
//! # Responsibility
//! - Define the canonical record owned by the todo store.
//! - Own the JSON wire shape used for console output.
//!
//! # Invariants
//! - `id` is positive and unique within one store.
//! - `completed_on` is conventionally set only for `TodoStatus::Done`; the
//!   model does not enforce it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned identifier. `0` is never a valid id.
pub type TodoId = u64;

/// Largest id accepted from outside the store (`2^53 - 1`, the largest
/// integer a JSON number holds exactly). Leaves headroom for `add_item`.
pub const MAX_SEED_ID: TodoId = (1 << 53) - 1;

/// Lifecycle state of a todo item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TodoStatus {
    /// Finished.
    Done,
    /// Work has started.
    InProgress,
    /// Created but not started.
    Todo,
}

impl TodoStatus {
    /// Stable string id used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Done => "done",
            Self::InProgress => "in-progress",
            Self::Todo => "todo",
        }
    }
}

impl Display for TodoStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One task record.
///
/// Field order is the serialized key order: `id`, `title`, `status`,
/// `completedOn` (omitted when absent).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: TodoId,
    /// Free text. Empty titles are accepted.
    pub title: String,
    pub status: TodoStatus,
    /// Meaningful only when `status == TodoStatus::Done`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_on: Option<NaiveDate>,
}

impl TodoItem {
    /// Creates a fresh `Todo` item with no completion date.
    pub fn new(id: TodoId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            status: TodoStatus::Todo,
            completed_on: None,
        }
    }

    pub fn with_status(mut self, status: TodoStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the completion date without touching `status`.
    pub fn with_completed_on(mut self, date: NaiveDate) -> Self {
        self.completed_on = Some(date);
        self
    }

    pub fn is_done(&self) -> bool {
        self.status == TodoStatus::Done
    }

    /// Checks the constraints a store relies on for id assignment.
    ///
    /// # Errors
    /// - `InvalidId` when `id` is `0` or above `MAX_SEED_ID`.
    pub fn validate(&self) -> Result<(), TodoValidationError> {
        if self.id == 0 || self.id > MAX_SEED_ID {
            return Err(TodoValidationError::InvalidId(self.id));
        }
        Ok(())
    }

    /// Renders the item as a single-line JSON object.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Rejections raised while accepting seed items into a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoValidationError {
    InvalidId(TodoId),
    DuplicateId(TodoId),
}

impl Display for TodoValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidId(id) => {
                write!(f, "todo id {id} is out of range (expected 1..={MAX_SEED_ID})")
            }
            Self::DuplicateId(id) => write!(f, "duplicate todo id {id}"),
        }
    }
}

impl Error for TodoValidationError {}
