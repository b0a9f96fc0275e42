// ABOUTME: Canonical domain models shared across the workspace
// ABOUTME: Re-exports recipe identity, filter, favorites, and generation types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Favorites collection and entries
pub mod favorite;
/// Search filter state from the browse screen
pub mod filter;
/// Ingredient-driven generation request and result
pub mod generation;
/// Canonical recipe and its identity
pub mod recipe;

pub use favorite::{FavoriteEntry, FavoritesSet};
pub use filter::SearchFilter;
pub use generation::{GenerationRequest, GenerationResult};
pub use recipe::{Difficulty, Ingredient, ProviderTag, Recipe, RecipeId, RecipeIdError};
