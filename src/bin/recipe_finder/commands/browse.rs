// ABOUTME: Browse, name search, and show commands for recipe-finder
// ABOUTME: Builds a search filter from flags and prints normalized recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_finder::{
    errors::{AppError, AppResult},
    models::{RecipeId, SearchFilter},
    search::RecipeLookup,
};
use tracing::info;

use super::Context;
use crate::helpers::display::{print_recipe_detail, print_recipe_list};

type Result<T> = AppResult<T>;

/// Browse with optional filters
pub async fn browse(
    context: &Context,
    query: Option<String>,
    diet: Option<String>,
    cuisine: Option<String>,
    intolerances: &[String],
    ingredients: &[String],
) -> Result<()> {
    let mut filter = SearchFilter {
        query,
        diet,
        cuisine,
        ingredients: ingredients
            .iter()
            .map(|item| item.trim().to_owned())
            .filter(|item| !item.is_empty())
            .collect(),
        ..SearchFilter::default()
    };
    for intolerance in intolerances {
        if !filter.intolerances.contains(intolerance.trim()) {
            filter.toggle_intolerance(intolerance);
        }
    }

    let recipes = context.search.browse(&filter).await?;
    if recipes.is_empty() && !filter.is_empty() {
        info!("No recipes matched the filter");
    }
    print_recipe_list(&recipes, &context.favorites.load(), context.json)
}

/// Name search on the name/category provider
pub async fn search(context: &Context, term: &str) -> Result<()> {
    let recipes = context.search.search_by_name(term).await?;
    print_recipe_list(&recipes, &context.favorites.load(), context.json)
}

/// Fetch and print one recipe
pub async fn show(context: &Context, id: &str) -> Result<()> {
    let id = parse_id(id)?;
    let recipe = context.search.lookup(&id).await?;
    let favorite = context.favorites.is_favorite(&recipe.id);
    print_recipe_detail(&recipe, favorite, context.json)
}

/// Parse a canonical id given on the command line
pub fn parse_id(id: &str) -> Result<RecipeId> {
    id.trim()
        .parse::<RecipeId>()
        .map_err(|e| AppError::invalid_input(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipe_finder::errors::ErrorCode;
    use recipe_finder::models::ProviderTag;

    #[test]
    fn test_parse_id_trims_and_splits_namespace() {
        let id = parse_id("  spoonacular:715538 ").unwrap();
        assert_eq!(id.provider(), ProviderTag::Spoonacular);
        assert_eq!(id.native_id(), "715538");
    }

    #[test]
    fn test_parse_id_without_namespace_is_invalid_input() {
        let error = parse_id("715538").unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
    }
}
