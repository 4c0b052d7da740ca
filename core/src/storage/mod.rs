//! Durable key-value storage
//!
//! The persistence bridge stores one JSON document per key. Implementations
//! never interpret the value; decoding happens in the caller.

mod file;
mod memory;

use async_trait::async_trait;

use crate::Result;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Key-value storage for JSON-serialized values
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Read the raw value stored under `key`, if any
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the value stored under `key`. Returns whether it existed.
    async fn remove(&self, key: &str) -> Result<bool>;
}
