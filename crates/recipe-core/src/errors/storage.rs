// ABOUTME: Error types for the persistent key-value storage backends
// ABOUTME: Covers unavailable backends, I/O failures, and unreadable stored values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::io;
use thiserror::Error;

/// Failures of a key-value storage backend
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend cannot be used at all in this session
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Reading or writing a key failed
    #[error("storage I/O error for key '{key}': {source}")]
    Io {
        /// Key being accessed
        key: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The key is not usable as a storage key
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),
}
