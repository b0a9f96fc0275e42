// ABOUTME: Persisted favorites keyed by canonical recipe id
// ABOUTME: Load-merge-save store with legacy migration and session-only degradation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Favorites subsystem
//!
//! Favorites are stored as one JSON document under the `favorites` key. Every
//! mutation re-reads that document, applies the change and writes the whole
//! set back, so two screens sharing the same storage do not lose each other's
//! changes except under a true write race.

/// Stored document format and legacy migration
pub mod migration;
/// The favorites store
pub mod store;

pub use store::{FavoritesStore, RefreshReport};

use thiserror::Error;

use crate::errors::{AppError, ErrorCode};
use crate::models::{ProviderTag, RecipeIdError};

/// Reasons a recipe cannot be favorited
#[derive(Debug, Error)]
pub enum FavoritesError {
    /// Fallback stubs and other recipes with no source provider
    #[error("recipe '{id}' has no source provider and cannot be favorited")]
    MissingProvider {
        /// Recipe id as given
        id: String,
    },

    /// The recipe id is not a namespaced id
    #[error("recipe id '{id}' is not a valid namespaced id: {source}")]
    InvalidId {
        /// Recipe id as given
        id: String,
        /// Parse failure
        #[source]
        source: RecipeIdError,
    },

    /// The id namespace disagrees with the recipe's source provider
    #[error("recipe id '{id}' is not in the {provider} namespace")]
    NamespaceMismatch {
        /// Recipe id as given
        id: String,
        /// Provider that produced the recipe
        provider: ProviderTag,
    },
}

impl From<FavoritesError> for AppError {
    fn from(error: FavoritesError) -> Self {
        Self::new(ErrorCode::InvalidInput, error.to_string()).with_source(error)
    }
}
