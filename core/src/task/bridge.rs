//! Persistence bridge for the task collection
//!
//! Serializes the whole collection as a JSON array under one storage key and
//! decodes it record-by-record on load.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

use super::hook::CommitHook;
use super::model::Task;
use crate::storage::KeyValueStorage;
use crate::Result;

/// Storage key holding the task collection
pub const TASKS_KEY: &str = "tasks";

/// Reads and writes the task collection through a [`KeyValueStorage`]
#[derive(Clone)]
pub struct TaskBridge {
    storage: Arc<dyn KeyValueStorage>,
    key: String,
}

impl TaskBridge {
    /// Create a bridge using the default `tasks` key
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            storage,
            key: TASKS_KEY.to_string(),
        }
    }

    /// Use a different storage key
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the persisted collection
    ///
    /// Absent, unreadable or malformed data yields an empty collection. The
    /// failure is logged, never returned.
    pub async fn load(&self) -> Vec<Task> {
        let raw = match self.storage.get(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "No persisted tasks");
                return Vec::new();
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to read persisted tasks");
                return Vec::new();
            }
        };

        let tasks = decode_tasks(&raw);
        debug!(key = %self.key, count = tasks.len(), "Loaded persisted tasks");
        tasks
    }

    /// Overwrite the persisted collection
    pub async fn save(&self, tasks: &[Task]) -> Result<()> {
        let content = serde_json::to_string_pretty(tasks)?;
        self.storage.set(&self.key, &content).await
    }
}

#[async_trait]
impl CommitHook for TaskBridge {
    async fn on_commit(&self, tasks: &[Task]) -> Result<()> {
        self.save(tasks).await
    }
}

/// Decode a persisted collection, dropping records that would break the
/// store's invariants (malformed, blank text, repeated id).
fn decode_tasks(raw: &str) -> Vec<Task> {
    let values: Vec<serde_json::Value> = match serde_json::from_str(raw) {
        Ok(values) => values,
        Err(e) => {
            warn!(error = %e, "Persisted tasks are not a JSON array, starting empty");
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    let mut tasks = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        let task: Task = match serde_json::from_value(value) {
            Ok(task) => task,
            Err(e) => {
                warn!(index, error = %e, "Dropping malformed persisted task");
                continue;
            }
        };
        if task.text.trim().is_empty() {
            warn!(index, id = %task.id, "Dropping persisted task with empty text");
            continue;
        }
        if !seen.insert(task.id.clone()) {
            warn!(index, id = %task.id, "Dropping persisted task with duplicate id");
            continue;
        }
        tasks.push(task);
    }
    tasks
}
