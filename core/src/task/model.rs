//! Task model definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A to-do item
///
/// Serialized in the shape the persisted collection uses:
/// `{"id", "text", "completed", "createdAt"}` with an RFC 3339 timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create a new, not yet completed task
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            completed: false,
            created_at: Utc::now(),
        }
    }

    /// Set the creation timestamp
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Set the completed flag
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Whether the task still needs doing
    pub fn is_active(&self) -> bool {
        !self.completed
    }
}

/// Generate a task id of the form `task-<unix millis>-<8 hex chars>`
pub fn generate_task_id() -> String {
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format!("task-{}-{}", Utc::now().timestamp_millis(), &suffix[..8])
}

/// Counts over a task collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskStats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

impl TaskStats {
    pub fn from_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        tasks.into_iter().fold(Self::default(), |mut stats, task| {
            stats.total += 1;
            if task.completed {
                stats.completed += 1;
            } else {
                stats.active += 1;
            }
            stats
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_create_task() {
        let task = Task::new("task-1", "Buy milk");
        assert_eq!(task.id, "task-1");
        assert_eq!(task.text, "Buy milk");
        assert!(!task.completed);
        assert!(task.is_active());
    }

    #[test]
    fn test_serialized_shape() {
        let created_at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let task = Task::new("task-1", "Buy milk").with_created_at(created_at);

        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["id"], "task-1");
        assert_eq!(json["text"], "Buy milk");
        assert_eq!(json["completed"], false);
        assert_eq!(json["createdAt"], "2024-03-01T12:00:00Z");
    }

    #[test]
    fn test_parses_millisecond_timestamps() {
        let task: Task = serde_json::from_str(
            r#"{"id":"1717171717171","text":"Walk dog","completed":true,"createdAt":"2024-05-31T16:08:37.171Z"}"#,
        )
        .unwrap();

        assert!(task.completed);
        assert_eq!(task.created_at.timestamp_millis(), 1717171717171);
    }

    #[test]
    fn test_generated_ids_are_distinct() {
        let a = generate_task_id();
        let b = generate_task_id();

        assert!(a.starts_with("task-"));
        assert_eq!(a.rsplit('-').next().unwrap().len(), 8);
        assert_ne!(a, b);
    }

    #[test]
    fn test_stats() {
        let tasks = vec![
            Task::new("a", "one"),
            Task::new("b", "two").with_completed(true),
            Task::new("c", "three"),
        ];
        let stats = TaskStats::from_tasks(&tasks);
        assert_eq!(
            stats,
            TaskStats {
                total: 3,
                active: 2,
                completed: 1
            }
        );
    }
}
