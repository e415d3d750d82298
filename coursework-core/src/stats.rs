//! Summary counts over the task list.

use crate::query::is_overdue;
use crate::task::Task;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TaskStats {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
    pub overdue: usize,
}

/// Single-pass aggregation. Pure function of (tasks, today); holds
/// `pending + completed == total` and `overdue <= pending` for any input.
pub fn task_stats(tasks: &[Task], today: NaiveDate) -> TaskStats {
    let mut stats = TaskStats {
        total: tasks.len(),
        ..TaskStats::default()
    };
    for t in tasks {
        if t.completed {
            stats.completed += 1;
        } else {
            stats.pending += 1;
            if is_overdue(t, today) {
                stats.overdue += 1;
            }
        }
    }
    stats
}
