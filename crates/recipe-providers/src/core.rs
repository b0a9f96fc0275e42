// ABOUTME: Core provider traits and query parameters for recipe data sources
// ABOUTME: Defines the ingredient-match and meal-catalog provider interfaces
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;

use crate::errors::ProviderResult;
use crate::mealdb::MealRecord;
use crate::spoonacular::{IngredientCandidate, RecipeInformation, SearchResultCard};

/// Provider query parameter names for a filtered search
pub mod query_params {
    /// Free-text query
    pub const QUERY: &str = "query";
    /// Diet restriction
    pub const DIET: &str = "diet";
    /// Cuisine
    pub const CUISINE: &str = "cuisine";
    /// Comma-separated intolerances
    pub const INTOLERANCES: &str = "intolerances";
    /// Comma-separated ingredients the recipe must contain
    pub const INCLUDE_INGREDIENTS: &str = "includeIngredients";
}

/// Parameters of a filtered provider search
///
/// Only set fields become query parameters; a field is never sent as an
/// empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderQuery {
    /// Free-text query
    pub query: Option<String>,
    /// Diet restriction
    pub diet: Option<String>,
    /// Cuisine
    pub cuisine: Option<String>,
    /// Comma-joined intolerances
    pub intolerances: Option<String>,
    /// Comma-joined required ingredients
    pub include_ingredients: Option<String>,
}

impl ProviderQuery {
    /// Query parameters in a stable order
    #[must_use]
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        [
            (query_params::QUERY, &self.query),
            (query_params::DIET, &self.diet),
            (query_params::CUISINE, &self.cuisine),
            (query_params::INTOLERANCES, &self.intolerances),
            (query_params::INCLUDE_INGREDIENTS, &self.include_ingredients),
        ]
        .into_iter()
        .filter_map(|(name, value)| {
            value
                .as_ref()
                .filter(|v| !v.is_empty())
                .map(|v| (name, v.clone()))
        })
        .collect()
    }
}

/// Ingredient-match provider: candidates by ingredients, detail by numeric id,
/// and filtered search
#[async_trait]
pub trait IngredientMatchProvider: Send + Sync {
    /// Recipes that use the given ingredients, best match first
    async fn find_by_ingredients(
        &self,
        ingredients: &[String],
        limit: u32,
    ) -> ProviderResult<Vec<IngredientCandidate>>;

    /// Full detail for one recipe
    async fn recipe_information(&self, native_id: u64) -> ProviderResult<RecipeInformation>;

    /// Filtered search returning result cards
    async fn complex_search(&self, query: &ProviderQuery) -> ProviderResult<Vec<SearchResultCard>>;
}

/// Name/category provider: search by meal name and lookup by opaque id
#[async_trait]
pub trait MealCatalogProvider: Send + Sync {
    /// Meals whose name matches `term`; an unmatched term yields an empty list
    async fn search(&self, term: &str) -> ProviderResult<Vec<MealRecord>>;

    /// One meal by id
    ///
    /// # Errors
    ///
    /// `ProviderError::NotFound` when the provider has no such meal.
    async fn lookup(&self, native_id: &str) -> ProviderResult<MealRecord>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_and_empty_fields_are_omitted() {
        let query = ProviderQuery {
            query: Some("pasta".to_owned()),
            diet: Some(String::new()),
            include_ingredients: Some("basil,tomato".to_owned()),
            ..ProviderQuery::default()
        };
        assert_eq!(
            query.to_params(),
            vec![
                ("query", "pasta".to_owned()),
                ("includeIngredients", "basil,tomato".to_owned()),
            ]
        );
    }
}
