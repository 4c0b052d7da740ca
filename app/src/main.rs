//! Task manager
//!
//! Entry point: opens the task board from the data directory, restores the
//! filter preference and loads the API explorer's data.

mod config;
mod state;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "task_manager=debug,tm_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    tracing::info!("Using data directory: {:?}", config.data_dir);

    tokio::fs::create_dir_all(&config.data_dir)
        .await
        .with_context(|| format!("Failed to create data directory {:?}", config.data_dir))?;

    let mut state = AppState::new(&config).await;

    let stats = state.board.stats();
    tracing::info!(
        total = stats.total,
        active = stats.active,
        completed = stats.completed,
        filter = state.board.filter().as_str(),
        "Task board ready"
    );

    if config.fetch_on_start {
        state.refresh_explorer().await;
    }

    Ok(())
}
