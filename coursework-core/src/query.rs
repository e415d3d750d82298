//! Read-only views over the task list, parameterized by "today".
//!
//! "Today" is always an explicit argument so results are reproducible in
//! tests without wall-clock coupling. Filtering preserves input order and
//! never re-sorts.

use crate::task::{Priority, Task};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    All,
    Pending,
    Completed,
    Overdue,
    HighPriority,
}

/// Subset of `tasks` matching `filter`, in input order.
pub fn filter_tasks<'a>(tasks: &'a [Task], filter: Filter, today: NaiveDate) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|t| matches_filter(t, filter, today))
        .collect()
}

fn matches_filter(task: &Task, filter: Filter, today: NaiveDate) -> bool {
    match filter {
        Filter::All => true,
        Filter::Pending => !task.completed,
        Filter::Completed => task.completed,
        Filter::Overdue => is_overdue(task, today),
        Filter::HighPriority => task.priority == Priority::High,
    }
}

/// Due strictly before `today` and not completed.
pub fn is_overdue(task: &Task, today: NaiveDate) -> bool {
    !task.completed && task.date < today
}

/// Signed whole-day distance from `today` to the due date.
/// Negative means past due, 0 due today, 1 due tomorrow.
pub fn days_until_due(task: &Task, today: NaiveDate) -> i64 {
    (task.date - today).num_days()
}

/// Human-readable due bucket derived from [`days_until_due`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueLabel {
    DaysAgo(i64),
    Today,
    Tomorrow,
    InDays(i64),
}

impl DueLabel {
    pub fn from_days(days: i64) -> Self {
        match days {
            d if d < 0 => DueLabel::DaysAgo(-d),
            0 => DueLabel::Today,
            1 => DueLabel::Tomorrow,
            d => DueLabel::InDays(d),
        }
    }
}

pub fn due_label(task: &Task, today: NaiveDate) -> DueLabel {
    DueLabel::from_days(days_until_due(task, today))
}

impl fmt::Display for DueLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DueLabel::DaysAgo(1) => write!(f, "1 day ago"),
            DueLabel::DaysAgo(n) => write!(f, "{n} days ago"),
            DueLabel::Today => write!(f, "today"),
            DueLabel::Tomorrow => write!(f, "tomorrow"),
            DueLabel::InDays(n) => write!(f, "in {n} days"),
        }
    }
}
