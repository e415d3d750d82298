//! TaskStore — the ordered task sequence and its persistence round-trip.
//!
//! The store is the single source of truth across process restarts. New
//! tasks go to the front (most recently created first); edits never move a
//! task; only creation and deletion change the sequence.

use crate::storage::Storage;
use crate::task::{Task, TaskDraft, TaskId};
use anyhow::{Context, Result};
use log::{debug, warn};

/// The single durable key holding the serialized task list.
pub const TASKS_KEY: &str = "tasks";

#[derive(Debug)]
pub struct TaskStore<S: Storage> {
    storage: S,
    tasks: Vec<Task>,
}

impl<S: Storage> TaskStore<S> {
    /// Load the persisted list. Absent, unreadable, or malformed data all
    /// fall back to an empty list; load never fails.
    pub fn load(storage: S) -> Self {
        let tasks = match storage.get(TASKS_KEY) {
            Ok(Some(bytes)) => match serde_json::from_slice(&bytes) {
                Ok(tasks) => tasks,
                Err(e) => {
                    warn!("stored task list is malformed, starting empty: {e}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("could not read stored task list, starting empty: {e}");
                Vec::new()
            }
        };
        Self { storage, tasks }
    }

    /// Full ordered sequence, most recently created first.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn insert_front(&mut self, task: Task) {
        self.tasks.insert(0, task);
    }

    pub fn find_by_id(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Overwrite the editable fields of the matching task, keeping `id`,
    /// `completed`, and `created_at`. Returns false when `id` is unknown.
    pub fn replace(&mut self, id: TaskId, draft: &TaskDraft) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        task.title = draft.title.clone();
        task.subject = draft.subject.clone();
        task.date = draft.date;
        task.priority = draft.priority;
        task.description = draft.description.clone();
        true
    }

    /// Flip `completed` on the matching task, returning the new value.
    /// `None` when `id` is unknown.
    pub fn toggle(&mut self, id: TaskId) -> Option<bool> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.completed = !task.completed;
        Some(task.completed)
    }

    /// Returns false when `id` is unknown.
    pub fn remove_by_id(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// Serialize the whole sequence and overwrite the durable key.
    pub fn persist(&mut self) -> Result<()> {
        let bytes = serde_json::to_vec(&self.tasks).context("serialize task list")?;
        self.storage.set(TASKS_KEY, &bytes)?;
        debug!("persisted {} tasks", self.tasks.len());
        Ok(())
    }
}
