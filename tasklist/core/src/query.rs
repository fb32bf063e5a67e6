//! Read-only views over a snapshot of tasks. Nothing here touches the
//! store; callers pass in the flattened task list and get a new one back.

use thiserror::Error;

use crate::task::{self, Task};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    #[error("month must be between 1 and 12, got {0}")]
    InvalidMonth(u32),
}

/// Tasks ordered by due date, earliest first, with priority breaking ties
/// (High before Medium before Low). Malformed due dates sort after every
/// real date regardless of priority, and unrecognized priorities rank last.
pub fn sorted(tasks: &[Task]) -> Vec<Task> {
    let mut tasks = tasks.to_vec();
    tasks.sort_by_key(|t| (task::due_date_key(&t.due_date), task::priority_rank(&t.priority)));
    tasks
}

/// The completed or the still-open partition of the snapshot.
pub fn by_completion(tasks: &[Task], complete: bool) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| t.complete == complete)
        .cloned()
        .collect()
}

/// Tasks due in the given month with the given completion state. The month
/// must already be a real one; anything outside 1-12 is the caller's input
/// error, not an empty result.
pub fn by_month(tasks: &[Task], month: u32, complete: bool) -> Result<Vec<Task>, QueryError> {
    if !(1..=12).contains(&month) {
        return Err(QueryError::InvalidMonth(month));
    }
    Ok(tasks
        .iter()
        .filter(|t| t.complete == complete && task::month_of(&t.due_date) == Some(month))
        .cloned()
        .collect())
}

/// Tasks filed under `category`, matched case-insensitively against each
/// task's own category field, with the given completion state. An empty
/// result means no task matched; unknown categories are not special.
pub fn by_category(tasks: &[Task], category: &str, complete: bool) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| t.complete == complete && t.category.eq_ignore_ascii_case(category))
        .cloned()
        .collect()
}
