// ABOUTME: Raw Spoonacular API payloads as returned on the wire
// ABOUTME: Lenient serde structs; every optional field defaults so normalization stays total
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// One ingredient line in any Spoonacular payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientLine {
    /// Provider's original ingredient text, e.g. `"2 cups flour"`
    #[serde(default)]
    pub original: Option<String>,
    /// Numeric amount
    #[serde(default)]
    pub amount: Option<f64>,
    /// Unit of `amount`
    #[serde(default)]
    pub unit: Option<String>,
    /// Ingredient name
    #[serde(default)]
    pub name: Option<String>,
}

/// Candidate from `findByIngredients`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientCandidate {
    /// Native recipe id
    pub id: u64,
    /// Recipe title
    #[serde(default)]
    pub title: Option<String>,
    /// Image URL
    #[serde(default)]
    pub image: Option<String>,
    /// Requested ingredients the recipe uses
    #[serde(default)]
    pub used_ingredients: Option<Vec<IngredientLine>>,
    /// Ingredients the recipe needs beyond the request
    #[serde(default)]
    pub missed_ingredients: Option<Vec<IngredientLine>>,
}

/// One instruction step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstructionStep {
    /// Step number within its group
    #[serde(default)]
    pub number: Option<u32>,
    /// Step text
    #[serde(default)]
    pub step: Option<String>,
}

/// One group of analyzed instructions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstructionGroup {
    /// Group name, often empty
    #[serde(default)]
    pub name: Option<String>,
    /// Ordered steps
    #[serde(default)]
    pub steps: Option<Vec<InstructionStep>>,
}

/// Detail from `/recipes/{id}/information`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeInformation {
    /// Native recipe id
    pub id: u64,
    /// Recipe title
    #[serde(default)]
    pub title: Option<String>,
    /// Image URL
    #[serde(default)]
    pub image: Option<String>,
    /// HTML summary
    #[serde(default)]
    pub summary: Option<String>,
    /// Instruction groups; the first is the main method
    #[serde(default)]
    pub analyzed_instructions: Option<Vec<InstructionGroup>>,
    /// Servings
    #[serde(default)]
    pub servings: Option<u32>,
    /// Total time in minutes
    #[serde(default)]
    pub ready_in_minutes: Option<u32>,
    /// Vegetarian flag
    #[serde(default)]
    pub vegetarian: Option<bool>,
    /// Vegan flag
    #[serde(default)]
    pub vegan: Option<bool>,
    /// Gluten-free flag
    #[serde(default)]
    pub gluten_free: Option<bool>,
    /// Dairy-free flag
    #[serde(default)]
    pub dairy_free: Option<bool>,
    /// Health score
    #[serde(default)]
    pub health_score: Option<f64>,
    /// Full ingredient list
    #[serde(default)]
    pub extended_ingredients: Option<Vec<IngredientLine>>,
}

/// Result card from `complexSearch` with recipe information attached
///
/// Also the payload the legacy detail screen persisted for saved recipes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultCard {
    /// Native recipe id
    pub id: u64,
    /// Recipe title
    #[serde(default)]
    pub title: Option<String>,
    /// Image URL
    #[serde(default)]
    pub image: Option<String>,
    /// Total time in minutes
    #[serde(default)]
    pub ready_in_minutes: Option<u32>,
    /// Servings
    #[serde(default)]
    pub servings: Option<u32>,
    /// Vegetarian flag
    #[serde(default)]
    pub vegetarian: Option<bool>,
    /// Vegan flag
    #[serde(default)]
    pub vegan: Option<bool>,
    /// Gluten-free flag
    #[serde(default)]
    pub gluten_free: Option<bool>,
    /// Dairy-free flag
    #[serde(default)]
    pub dairy_free: Option<bool>,
}

/// `complexSearch` envelope
#[derive(Debug, Deserialize)]
pub(crate) struct ComplexSearchResponse {
    #[serde(default)]
    pub results: Option<Vec<SearchResultCard>>,
}
