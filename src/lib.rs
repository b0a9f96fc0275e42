// ABOUTME: Main library entry point for the Recipe Finder client
// ABOUTME: Query building, generation pipeline, favorites persistence, and search over recipe providers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Finder
//!
//! Provider-agnostic recipe search, ingredient-driven recipe generation and
//! persisted favorites for a single-user client.
//!
//! ## Architecture
//!
//! - **Models** (`recipe-core`): canonical `Recipe`, `RecipeId`, filters and
//!   favorites
//! - **Providers** (`recipe-providers`): Spoonacular and TheMealDB clients plus
//!   the recipe normalizer
//! - **Query**: filter state to provider query, with a curated fallback
//! - **Generation**: two-phase ingredient search and detail fetch
//! - **Favorites**: load-merge-save store over a key-value backend
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use recipe_finder::config::RecipeFinderConfig;
//! use recipe_finder::errors::AppResult;
//! use recipe_finder::favorites::FavoritesStore;
//! use recipe_finder::storage;
//!
//! fn main() -> AppResult<()> {
//!     let config = RecipeFinderConfig::from_env()?;
//!     let favorites = FavoritesStore::new(storage::from_config(&config.storage));
//!     println!("{} favorites", favorites.load().len());
//!     Ok(())
//! }
//! ```

// Re-export recipe-core modules so crate code can use `crate::errors::*` etc.
pub use recipe_core::constants;
pub use recipe_core::errors;
pub use recipe_core::models;

/// Environment configuration
pub mod config;

/// Persisted favorites
pub mod favorites;

/// Ingredient-driven recipe generation
pub mod generation;

/// Logging configuration and structured logging setup
pub mod logging;

/// Filter state to provider query mapping
pub mod query;

/// Curated recipes shown without an active filter
pub mod sample_data;

/// Recipe search and lookup over both providers
pub mod search;

/// Key-value storage backends
pub mod storage;
