//! Task module
//!
//! This module contains the task model, the store that owns the task
//! collection, and the bridge that persists it.

mod bridge;
mod hook;
mod model;
mod store;

pub use bridge::{TaskBridge, TASKS_KEY};
pub use hook::CommitHook;
pub use model::*;
pub use store::TaskStore;
