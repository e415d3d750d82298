//! coursework-core: domain model for a personal university assignment tracker.
//!
//! Create, edit, complete, delete, and filter assignments, with the list
//! persisted to local key-value storage between sessions. Everything here
//! returns plain data and takes "today" as an explicit parameter; rendering
//! belongs to the caller.

pub mod controller;
pub mod query;
pub mod stats;
pub mod storage;
pub mod store;
pub mod task;

pub use controller::{EditState, TaskController};
pub use query::{DueLabel, Filter, days_until_due, due_label, filter_tasks, is_overdue};
pub use stats::{TaskStats, task_stats};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::{TASKS_KEY, TaskStore};
pub use task::{Priority, Task, TaskDraft, TaskId};
