//! Task model for the coursework tracker.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Unique task identifier. Assigned from a monotonically increasing counter,
/// never reused.
pub type TaskId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// A single trackable assignment.
///
/// Wire names are camelCase so previously persisted blobs keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    /// Course/category label.
    pub subject: String,
    /// Due date, calendar day only.
    pub date: NaiveDate,
    pub priority: Priority,
    #[serde(default)]
    pub description: String,
    pub completed: bool,
    /// Set once at creation, never changes afterwards.
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn new(id: TaskId, draft: TaskDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            subject: draft.subject,
            date: draft.date,
            priority: draft.priority,
            description: draft.description,
            completed: false,
            created_at,
        }
    }
}

/// The editable field set shared by create and commit-edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    pub subject: String,
    pub date: NaiveDate,
    pub priority: Priority,
    pub description: String,
}

impl TaskDraft {
    pub fn new(
        title: impl Into<String>,
        subject: impl Into<String>,
        date: NaiveDate,
        priority: Priority,
    ) -> Self {
        Self {
            title: title.into(),
            subject: subject.into(),
            date,
            priority,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn new_task_starts_uncompleted() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let t = Task::new(1, TaskDraft::new("Essay", "Lit", date, Priority::High), now);

        assert!(!t.completed);
        assert_eq!(t.id, 1);
        assert_eq!(t.created_at, now);
        assert_eq!(t.description, "");
    }

    #[test]
    fn wire_format_matches_persisted_layout() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let t = Task::new(
            7,
            TaskDraft::new("Lab report", "Physics", date, Priority::Medium)
                .with_description("sections 1-3"),
            now,
        );

        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["date"], "2024-06-10");
        assert_eq!(json["priority"], "medium");
        assert_eq!(json["completed"], false);
        assert!(json["createdAt"].as_str().unwrap().starts_with("2024-06-01T12:00:00"));
    }

    #[test]
    fn description_defaults_when_missing_from_stored_record() {
        let json = r#"{
            "id": 3,
            "title": "Reading",
            "subject": "History",
            "date": "2024-05-01",
            "priority": "low",
            "completed": true,
            "createdAt": "2024-04-01T08:00:00Z"
        }"#;
        let t: Task = serde_json::from_str(json).unwrap();
        assert_eq!(t.description, "");
        assert!(t.completed);
    }
}
