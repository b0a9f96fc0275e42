// ABOUTME: Recipe normalizer turning raw provider payloads into canonical recipes
// ABOUTME: One total, pure conversion per provider payload shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Normalizer
//!
//! Every raw payload a provider client returns is wrapped in [`RawRecipe`]
//! and converted by [`normalize`]. Conversion never fails: missing or blank
//! fields fall back to fixed defaults, so a malformed record still renders.
//! Ingredient and instruction order always follows the source payload.

/// HTML tag stripping for summaries
pub mod html;
mod mealdb;
mod spoonacular;

pub use html::strip_html;

use crate::constants::recipes::NO_INSTRUCTIONS_PLACEHOLDER;
use crate::mealdb::MealRecord;
use crate::models::{ProviderTag, Recipe};
use crate::spoonacular::{IngredientCandidate, RecipeInformation, SearchResultCard};

/// A raw provider payload, tagged by the shape it arrived in
#[derive(Debug, Clone)]
pub enum RawRecipe {
    /// TheMealDB meal record
    Meal(MealRecord),
    /// Spoonacular ingredient-match candidate plus its detail
    IngredientMatch {
        /// Search-phase candidate supplying the ingredient lists
        candidate: IngredientCandidate,
        /// Detail-phase payload supplying summary, instructions and flags
        detail: RecipeInformation,
    },
    /// Spoonacular full detail payload
    Information(RecipeInformation),
    /// Spoonacular search result card
    SearchResult(SearchResultCard),
}

impl RawRecipe {
    /// Provider that produced this payload
    #[must_use]
    pub const fn provider(&self) -> ProviderTag {
        match self {
            Self::Meal(_) => ProviderTag::MealDb,
            Self::IngredientMatch { .. } | Self::Information(_) | Self::SearchResult(_) => {
                ProviderTag::Spoonacular
            }
        }
    }
}

/// Convert a raw payload into the canonical recipe
///
/// The result's `source_provider` is always `raw.provider()` and its id lives
/// in that provider's namespace.
#[must_use]
pub fn normalize(raw: &RawRecipe) -> Recipe {
    match raw {
        RawRecipe::Meal(meal) => mealdb::normalize_meal(meal),
        RawRecipe::IngredientMatch { candidate, detail } => {
            spoonacular::normalize_ingredient_match(candidate, detail)
        }
        RawRecipe::Information(detail) => spoonacular::normalize_information(detail),
        RawRecipe::SearchResult(card) => spoonacular::normalize_search_result(card),
    }
}

/// Trimmed value if present and not blank
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// The steps, or the single placeholder step when there are none
fn or_placeholder_steps(steps: Vec<String>) -> Vec<String> {
    if steps.is_empty() {
        vec![NO_INSTRUCTIONS_PLACEHOLDER.to_owned()]
    } else {
        steps
    }
}
