//! Starter items handed to the store at startup.

use crate::model::todo_item::{TodoItem, TodoStatus};
use chrono::NaiveDate;

/// The three fixed starter items, one per status.
pub fn default_items() -> Vec<TodoItem> {
    let learned_html_on =
        NaiveDate::from_ymd_opt(2021, 9, 11).expect("seed date is a valid calendar date");

    vec![
        TodoItem::new(1, "Learn HTML")
            .with_status(TodoStatus::Done)
            .with_completed_on(learned_html_on),
        TodoItem::new(2, "Learn TypeScript").with_status(TodoStatus::InProgress),
        TodoItem::new(3, "Write the best app in the world"),
    ]
}
