//! Device-local key-value persistence.
//!
//! Stores and the session read and write JSON strings under well-known keys through the
//! [`KeyValueStore`] trait. Two backends ship with the crate:
//!
//! - [`MemoryStore`]: in-process map with switchable failure injection, used in tests.
//! - [`FileStore`]: one file per key under a directory, used by the demo binary.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend's underlying I/O failed.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be encoded to or decoded from JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backend rejected the request for any other reason.
    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Asynchronous string key-value storage.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` if there is none.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Deletes `key`. Removing an absent key succeeds.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
