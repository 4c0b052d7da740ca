//! Task store
//!
//! Owns the ordered task collection. Every accepted mutation is followed by a
//! commit to the registered hooks; rejected and no-op mutations are not.

use tracing::{debug, warn};

use super::bridge::TaskBridge;
use super::hook::CommitHook;
use super::model::{generate_task_id, Task, TaskStats};
use crate::Result;

/// In-memory task collection in creation order
#[derive(Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    hooks: Vec<Box<dyn CommitHook>>,
}

impl TaskStore {
    /// Create an empty store with no hooks
    pub fn new() -> Self {
        Self::default()
    }

    /// Hydrate from the bridge and persist every later mutation through it
    pub async fn load(bridge: TaskBridge) -> Self {
        let tasks = bridge.load().await;
        Self::from_tasks(tasks).with_hook(bridge)
    }

    /// Create a store holding `tasks`, keeping the first of any repeated id
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let mut store = Self::new();
        for task in tasks {
            if store.get(&task.id).is_some() {
                warn!(id = %task.id, "Ignoring task with duplicate id");
                continue;
            }
            store.tasks.push(task);
        }
        store
    }

    /// Register a hook to run after each accepted mutation
    pub fn with_hook(mut self, hook: impl CommitHook + 'static) -> Self {
        self.hooks.push(Box::new(hook));
        self
    }

    /// All tasks, oldest first
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn stats(&self) -> TaskStats {
        TaskStats::from_tasks(&self.tasks)
    }

    /// Append a new task
    ///
    /// Blank text is rejected silently and `Ok(None)` is returned. Otherwise
    /// the trimmed text is stored and the created task is returned.
    pub async fn add_task(&mut self, text: &str) -> Result<Option<Task>> {
        let text = text.trim();
        if text.is_empty() {
            debug!("Ignoring task with empty text");
            return Ok(None);
        }

        let mut id = generate_task_id();
        while self.get(&id).is_some() {
            id = generate_task_id();
        }

        let task = Task::new(id, text);
        self.tasks.push(task.clone());
        debug!(id = %task.id, "Added task");

        self.commit().await?;
        Ok(Some(task))
    }

    /// Flip the completed flag of the task with `id`
    ///
    /// Returns the new flag, or `None` if no task has that id.
    pub async fn toggle_task(&mut self, id: &str) -> Result<Option<bool>> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            debug!(id, "Toggle ignored, no such task");
            return Ok(None);
        };
        task.completed = !task.completed;
        let completed = task.completed;
        debug!(id, completed, "Toggled task");

        self.commit().await?;
        Ok(Some(completed))
    }

    /// Remove the task with `id`, returning it if it existed
    pub async fn delete_task(&mut self, id: &str) -> Result<Option<Task>> {
        let Some(index) = self.tasks.iter().position(|t| t.id == id) else {
            debug!(id, "Delete ignored, no such task");
            return Ok(None);
        };
        let task = self.tasks.remove(index);
        debug!(id, "Deleted task");

        self.commit().await?;
        Ok(Some(task))
    }

    /// Run every hook; the mutation stands even if one of them fails
    async fn commit(&self) -> Result<()> {
        let mut first_error = None;
        for hook in &self.hooks {
            if let Err(e) = hook.on_commit(&self.tasks).await {
                warn!(error = %e, "Failed to commit task collection");
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
