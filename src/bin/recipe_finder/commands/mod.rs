// ABOUTME: Subcommand implementations for recipe-finder
// ABOUTME: Shared command context plus browse, generate, and favorites commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod browse;
pub mod favorites;
pub mod generate;

use recipe_finder::{
    favorites::FavoritesStore, generation::GenerationPipeline, search::RecipeSearch,
};

/// Services every command may use
pub struct Context {
    pub search: RecipeSearch,
    pub pipeline: GenerationPipeline,
    pub favorites: FavoritesStore,
    /// Print JSON instead of text
    pub json: bool,
}
