// ABOUTME: Spoonacular ingredient-match provider module
// ABOUTME: Raw response payloads and the HTTP client implementing IngredientMatchProvider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Raw Spoonacular response payloads
pub mod dto;
/// HTTP client
pub mod provider;

pub use dto::{
    IngredientCandidate, IngredientLine, InstructionGroup, InstructionStep, RecipeInformation,
    SearchResultCard,
};
pub use provider::{SpoonacularConfig, SpoonacularProvider};
