use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single to-do item. The due date and priority are kept as the text the
/// user entered; they are interpreted on demand when sorting or filtering,
/// so historical data that no longer parses is still carried along.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    pub category: String,
    pub due_date: String,
    pub priority: String,
    #[serde(default)]
    pub complete: bool,
}

impl Task {
    /// Creates a new, incomplete task.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        due_date: impl Into<String>,
        priority: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            due_date: due_date.into(),
            priority: priority.into(),
            complete: false,
        }
    }

    pub fn mark_complete(&mut self) {
        self.complete = true;
    }

    pub fn mark_incomplete(&mut self) {
        self.complete = false;
    }
}

/// Sort rank of a priority label: High before Medium before Low,
/// case-insensitive. Anything unrecognized ranks last.
pub fn priority_rank(priority: &str) -> u32 {
    match priority.to_lowercase().as_str() {
        "high" => 1,
        "medium" => 2,
        "low" => 3,
        _ => u32::MAX,
    }
}

/// Sort key of a `YYYY-MM-DD` due date. Dates that fail to parse map to the
/// maximum date, so malformed entries always sort after every real one.
pub fn due_date_key(due_date: &str) -> NaiveDate {
    NaiveDate::parse_from_str(due_date, "%Y-%m-%d").unwrap_or(NaiveDate::MAX)
}

/// The month component of a `YYYY-MM-DD` due date, or `None` when the string
/// has no second dash-delimited component, it is not numeric, or it falls
/// outside 1-12.
pub fn month_of(due_date: &str) -> Option<u32> {
    let month = due_date.split('-').nth(1)?.parse::<u32>().ok()?;
    (1..=12).contains(&month).then_some(month)
}
