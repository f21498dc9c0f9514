//! Persistent key-value storage
//!
//! Defines the storage capability consumed by the auth manager and its two
//! implementations: an in-memory map and a JSON file on disk.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::error::StorageError;

/// Key under which the registry of all registered users is persisted.
pub const USERS_KEY: &str = "users";

/// Key under which the currently active session user is persisted.
pub const SESSION_KEY: &str = "user";

/// Asynchronous string key-value store.
///
/// Values are JSON documents produced by the caller; the store treats them as
/// opaque strings. Every operation may fail with a [`StorageError`], which
/// callers propagate rather than retry.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, or `None` if the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
