//! Task board
//!
//! The task screen's state: the store, the active filter (remembered across
//! restarts under its own storage key) and the current page of the filtered
//! list.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::storage::KeyValueStorage;
use crate::task::{Task, TaskBridge, TaskStats, TaskStore};
use crate::view::{Page, PageCursor, Paginator, TaskFilter};
use crate::Result;

/// Storage key holding the filter preference
pub const FILTER_KEY: &str = "taskFilter";

pub struct TaskBoard {
    store: TaskStore,
    filter: TaskFilter,
    cursor: PageCursor,
    paginator: Paginator,
    storage: Option<Arc<dyn KeyValueStorage>>,
}

impl TaskBoard {
    /// A board over `store` that does not remember its filter
    pub fn new(store: TaskStore, paginator: Paginator) -> Self {
        Self {
            store,
            filter: TaskFilter::default(),
            cursor: PageCursor::new(),
            paginator,
            storage: None,
        }
    }

    /// Hydrate tasks and the filter preference from `storage`
    pub async fn open(storage: Arc<dyn KeyValueStorage>, paginator: Paginator) -> Self {
        let store = TaskStore::load(TaskBridge::new(Arc::clone(&storage))).await;
        let filter = load_filter(storage.as_ref()).await;
        debug!(tasks = store.len(), filter = filter.as_str(), "Opened task board");

        Self {
            store,
            filter,
            cursor: PageCursor::new(),
            paginator,
            storage: Some(storage),
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn filter(&self) -> TaskFilter {
        self.filter
    }

    /// Switch filter, going back to the first page
    ///
    /// The new filter applies even if remembering it fails.
    pub async fn set_filter(&mut self, filter: TaskFilter) -> Result<()> {
        self.filter = filter;
        self.cursor.reset();

        if let Some(storage) = &self.storage {
            let value = serde_json::to_string(&filter)?;
            if let Err(e) = storage.set(FILTER_KEY, &value).await {
                warn!(error = %e, "Failed to store filter preference");
                return Err(e);
            }
        }
        Ok(())
    }

    /// Tasks passing the active filter
    pub fn visible(&self) -> Vec<&Task> {
        self.filter.apply(self.store.tasks())
    }

    /// The current page of visible tasks
    pub fn page(&self) -> Page<&Task> {
        self.paginator.page(&self.visible(), self.cursor.get())
    }

    pub fn stats(&self) -> TaskStats {
        self.store.stats()
    }

    pub fn next_page(&mut self) -> usize {
        let count = self.visible().len();
        self.cursor.next(count, &self.paginator)
    }

    pub fn prev_page(&mut self) -> usize {
        let count = self.visible().len();
        self.cursor.prev(count, &self.paginator)
    }

    pub fn go_to_page(&mut self, page: usize) -> usize {
        let count = self.visible().len();
        self.cursor.go_to(page, count, &self.paginator)
    }

    pub async fn add(&mut self, text: &str) -> Result<Option<Task>> {
        self.store.add_task(text).await
    }

    pub async fn toggle(&mut self, id: &str) -> Result<Option<bool>> {
        self.store.toggle_task(id).await
    }

    pub async fn delete(&mut self, id: &str) -> Result<Option<Task>> {
        self.store.delete_task(id).await
    }
}

async fn load_filter(storage: &dyn KeyValueStorage) -> TaskFilter {
    match storage.get(FILTER_KEY).await {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!(error = %e, "Malformed filter preference, showing all tasks");
            TaskFilter::default()
        }),
        Ok(None) => TaskFilter::default(),
        Err(e) => {
            warn!(error = %e, "Failed to read filter preference");
            TaskFilter::default()
        }
    }
}
