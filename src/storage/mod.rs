// ABOUTME: Persistent key-value storage abstraction for client-side state
// ABOUTME: Pluggable backends (file, in-memory) selected from configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// File-backed store, one file per key
pub mod file;
/// In-memory store
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::sync::Arc;
use tracing::debug;

use crate::config::{StorageBackend, StorageConfig};
use crate::errors::StorageError;

/// Synchronous string key-value store shared by the whole process
///
/// Values are opaque strings; callers own the encoding. A missing key is
/// `Ok(None)`, not an error.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`; deleting a missing key succeeds
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Build the configured backend
#[must_use]
pub fn from_config(config: &StorageConfig) -> Arc<dyn KeyValueStore> {
    debug!(backend = %config.backend, "Opening favorites storage");
    match config.backend {
        StorageBackend::File => Arc::new(FileStore::new(&config.data_dir)),
        StorageBackend::Memory => Arc::new(MemoryStore::new()),
    }
}

/// Keys become file names, so only a conservative character set is accepted
pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key() {
        assert!(validate_key("favorites").is_ok());
        assert!(validate_key("saved_recipes").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("../etc/passwd").is_err());
    }
}
