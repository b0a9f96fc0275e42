// ABOUTME: Recipe search service over both providers
// ABOUTME: Filtered browse, name search, and re-fetch of one recipe by canonical id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use recipe_providers::{normalize, IngredientMatchProvider, MealCatalogProvider, RawRecipe};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::errors::{AppError, AppResult};
use crate::models::{ProviderTag, Recipe, RecipeId, SearchFilter};
use crate::query::{self, QueryPlan};
use crate::sample_data;

/// Fetch one normalized recipe by canonical id
#[async_trait]
pub trait RecipeLookup: Send + Sync {
    /// Current detail for `id`
    ///
    /// # Errors
    ///
    /// Returns an error if the id is unusable for its provider or the
    /// provider call fails
    async fn lookup(&self, id: &RecipeId) -> AppResult<Recipe>;
}

/// Search over the ingredient-match and name/category providers
#[derive(Clone)]
pub struct RecipeSearch {
    ingredient_match: Arc<dyn IngredientMatchProvider>,
    catalog: Arc<dyn MealCatalogProvider>,
}

impl RecipeSearch {
    /// Service over the two providers
    #[must_use]
    pub fn new(
        ingredient_match: Arc<dyn IngredientMatchProvider>,
        catalog: Arc<dyn MealCatalogProvider>,
    ) -> Self {
        Self {
            ingredient_match,
            catalog,
        }
    }

    /// Recipes for a browse filter
    ///
    /// An empty filter returns the curated recipes without a network call.
    ///
    /// # Errors
    ///
    /// Returns an error if the filtered provider search fails
    #[instrument(skip(self, filter), fields(advanced = filter.has_advanced_filters()))]
    pub async fn browse(&self, filter: &SearchFilter) -> AppResult<Vec<Recipe>> {
        match query::build(filter) {
            QueryPlan::SampleData => {
                debug!("No active filter, returning curated recipes");
                Ok(sample_data::popular_recipes())
            }
            QueryPlan::Provider(provider_query) => {
                let cards = self.ingredient_match.complex_search(&provider_query).await?;
                info!(results = cards.len(), "Filtered browse completed");
                Ok(cards
                    .into_iter()
                    .map(|card| normalize(&RawRecipe::SearchResult(card)))
                    .collect())
            }
        }
    }

    /// Meals whose name matches `term`; a blank term matches nothing
    ///
    /// # Errors
    ///
    /// Returns an error if the provider search fails
    #[instrument(skip(self))]
    pub async fn search_by_name(&self, term: &str) -> AppResult<Vec<Recipe>> {
        let term = term.trim();
        if term.is_empty() {
            return Ok(Vec::new());
        }
        let meals = self.catalog.search(term).await?;
        Ok(meals
            .into_iter()
            .map(|meal| normalize(&RawRecipe::Meal(meal)))
            .collect())
    }
}

#[async_trait]
impl RecipeLookup for RecipeSearch {
    #[instrument(skip(self), fields(recipe_id = %id))]
    async fn lookup(&self, id: &RecipeId) -> AppResult<Recipe> {
        match id.provider() {
            ProviderTag::MealDb => {
                let meal = self.catalog.lookup(id.native_id()).await?;
                Ok(normalize(&RawRecipe::Meal(meal)))
            }
            ProviderTag::Spoonacular => {
                let native_id = id.native_id().parse::<u64>().map_err(|_| {
                    AppError::invalid_input(format!(
                        "spoonacular recipe ids are numeric, got '{}'",
                        id.native_id()
                    ))
                })?;
                let detail = self.ingredient_match.recipe_information(native_id).await?;
                Ok(normalize(&RawRecipe::Information(detail)))
            }
        }
    }
}
