//! Lifecycle controller — the only mutation path into the store.
//!
//! Every mutating operation applies to the in-memory list first and then
//! persists; a failed write surfaces as an error while the list stays
//! consistent. Lookups on unknown ids are silent no-ops so the controller
//! tolerates stale ids from a detached view.

use crate::query::{Filter, filter_tasks};
use crate::stats::{TaskStats, task_stats};
use crate::storage::Storage;
use crate::store::TaskStore;
use crate::task::{Task, TaskDraft, TaskId};
use anyhow::{Result, bail};
use chrono::{DateTime, NaiveDate, Utc};

/// Session-scoped edit mode: at most one task is targeted for in-place
/// modification at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Idle,
    Editing(TaskId),
}

#[derive(Debug)]
pub struct TaskController<S: Storage> {
    store: TaskStore<S>,
    next_id: TaskId,
    edit: EditState,
}

impl<S: Storage> TaskController<S> {
    pub fn new(store: TaskStore<S>) -> Self {
        // Seed above the highest persisted id so ids are never reused.
        let next_id = store.tasks().iter().map(|t| t.id).max().map_or(1, |m| m + 1);
        Self {
            store,
            next_id,
            edit: EditState::Idle,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    pub fn edit_state(&self) -> EditState {
        self.edit
    }

    pub fn filtered(&self, filter: Filter, today: NaiveDate) -> Vec<&Task> {
        filter_tasks(self.store.tasks(), filter, today)
    }

    pub fn stats(&self, today: NaiveDate) -> TaskStats {
        task_stats(self.store.tasks(), today)
    }

    /// Create a task from `draft`, stamped with `now`, prepend it, and
    /// persist. Edit state is left alone; creation and editing are separate
    /// entry points.
    pub fn create(&mut self, draft: TaskDraft, now: DateTime<Utc>) -> Result<TaskId> {
        if draft.title.trim().is_empty() {
            bail!("task title must not be empty");
        }
        let id = self.next_id;
        self.next_id += 1;
        self.store.insert_front(Task::new(id, draft, now));
        self.store.persist()?;
        Ok(id)
    }

    /// Enter edit mode for `id`. Unknown ids leave the state unchanged; the
    /// task itself is not touched.
    pub fn begin_edit(&mut self, id: TaskId) {
        if self.store.find_by_id(id).is_some() {
            self.edit = EditState::Editing(id);
        }
    }

    /// Replace the editable fields of `id` and persist; `id`, `completed`,
    /// and `created_at` are preserved. Unknown ids leave the store
    /// untouched. Edit mode ends either way.
    pub fn commit_edit(&mut self, id: TaskId, draft: TaskDraft) -> Result<()> {
        self.edit = EditState::Idle;
        if self.store.replace(id, &draft) {
            self.store.persist()?;
        }
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.edit = EditState::Idle;
    }

    /// Flip completion for `id` and persist. Unknown ids are a silent no-op.
    pub fn toggle_completion(&mut self, id: TaskId) -> Result<()> {
        if self.store.toggle(id).is_some() {
            self.store.persist()?;
        }
        Ok(())
    }

    /// Remove `id` and persist. Idempotent. Deleting the task currently
    /// being edited also ends edit mode, so no dangling edit target remains.
    pub fn delete(&mut self, id: TaskId) -> Result<()> {
        if self.edit == EditState::Editing(id) {
            self.edit = EditState::Idle;
        }
        if self.store.remove_by_id(id) {
            self.store.persist()?;
        }
        Ok(())
    }
}
