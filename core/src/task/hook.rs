//! Commit hook trait
//!
//! Defines the interface the store notifies after each accepted mutation.

use async_trait::async_trait;

use super::model::Task;
use crate::Result;

/// Receives the full task collection after every accepted mutation
#[async_trait]
pub trait CommitHook: Send + Sync {
    /// Called with the collection as it stands after the mutation
    async fn on_commit(&self, tasks: &[Task]) -> Result<()>;
}
