// ABOUTME: Recipe data provider implementations for Spoonacular and TheMealDB
// ABOUTME: Provider traits, shared HTTP plumbing, raw payload types, and the recipe normalizer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! Recipe data provider implementations and core abstractions.
//!
//! Two external recipe sources with incompatible schemas sit behind two
//! traits. Their raw payloads never leave this crate un-normalized: callers
//! hand them to [`normalize::normalize`] to get a canonical [`Recipe`].

// Re-export recipe-core modules so provider code can use `crate::errors::*` etc.
pub use recipe_core::constants;
pub use recipe_core::errors;
pub use recipe_core::models;

/// Core provider traits and query types
pub mod core;
/// Shared HTTP client and response handling for provider API calls
pub mod http_client;
/// TheMealDB name/category provider
pub mod mealdb;
/// Raw payload to canonical recipe conversion
pub mod normalize;
/// Spoonacular ingredient-match provider
pub mod spoonacular;

pub use core::{IngredientMatchProvider, MealCatalogProvider, ProviderQuery};
pub use http_client::{initialize_shared_client, shared_client};
pub use mealdb::{MealDbProvider, MealRecord, MealSlot};
pub use normalize::{normalize, RawRecipe};
pub use recipe_core::models::Recipe;
pub use spoonacular::{
    IngredientCandidate, IngredientLine, InstructionGroup, InstructionStep, RecipeInformation,
    SearchResultCard, SpoonacularConfig, SpoonacularProvider,
};
