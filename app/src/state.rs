//! Application state

use std::sync::Arc;
use tracing::{info, warn};

use tm_core::board::TaskBoard;
use tm_core::explorer::ApiExplorer;
use tm_core::remote::{HttpRemoteSource, RemoteSource};
use tm_core::storage::{FileStorage, KeyValueStorage};
use tm_core::view::Paginator;

use crate::config::AppConfig;

/// Everything the two screens need, owned in one place
pub struct AppState {
    pub board: TaskBoard,
    pub explorer: ApiExplorer,
    source: Box<dyn RemoteSource>,
}

impl AppState {
    /// Open the task board from the configured data directory
    pub async fn new(config: &AppConfig) -> Self {
        let storage = Arc::new(FileStorage::new(&config.data_dir));
        let source = HttpRemoteSource::new(config.api_base_url.clone());
        Self::with_parts(storage, Box::new(source), Paginator::new(config.page_size)).await
    }

    pub async fn with_parts(
        storage: Arc<dyn KeyValueStorage>,
        source: Box<dyn RemoteSource>,
        paginator: Paginator,
    ) -> Self {
        Self {
            board: TaskBoard::open(storage, paginator).await,
            explorer: ApiExplorer::new(paginator),
            source,
        }
    }

    /// Fetch the explorer's data; a failure stays visible in its status
    pub async fn refresh_explorer(&mut self) -> bool {
        match self.explorer.refresh(self.source.as_ref()).await {
            Ok(()) => {
                let (users, posts) = self.explorer.counts();
                info!(users, posts, "Explorer data loaded");
                true
            }
            Err(e) => {
                warn!(error = %e, "Explorer data unavailable, retry to try again");
                false
            }
        }
    }
}
