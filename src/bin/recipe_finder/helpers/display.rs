// ABOUTME: Output formatting helpers for recipe-finder
// ABOUTME: Text and JSON rendering of recipes, generation results, and favorites
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_finder::{
    errors::AppResult,
    favorites::RefreshReport,
    models::{FavoritesSet, GenerationResult, Recipe},
};
use serde::Serialize;
use serde_json::json;

type Result<T> = AppResult<T>;

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn meta_line(recipe: &Recipe) -> String {
    let mut parts = Vec::new();
    if recipe.cook_time_minutes > 0 {
        parts.push(format!("{} min", recipe.cook_time_minutes));
    }
    parts.push(format!("serves {}", recipe.servings));
    match (&recipe.category, &recipe.area) {
        (Some(category), Some(area)) => parts.push(format!("{category} • {area}")),
        (Some(single), None) | (None, Some(single)) => parts.push(single.clone()),
        (None, None) => {}
    }
    if !recipe.dietary_tags.is_empty() {
        let tags = recipe
            .dietary_tags
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        parts.push(tags);
    }
    parts.join(" | ")
}

/// Print a list of recipes, marking favorites
pub fn print_recipe_list(recipes: &[Recipe], favorites: &FavoritesSet, json: bool) -> Result<()> {
    if json {
        return print_json(recipes);
    }
    if recipes.is_empty() {
        println!("No recipes found. Try adjusting your search or filters.");
        return Ok(());
    }
    for recipe in recipes {
        let marker = if favorites.contains(&recipe.id) { "*" } else { " " };
        println!("{marker} {:<24} {}", recipe.id, recipe.title);
        println!("  {:<24} {}", "", meta_line(recipe));
    }
    Ok(())
}

/// Print one recipe in full
pub fn print_recipe_detail(recipe: &Recipe, favorite: bool, json: bool) -> Result<()> {
    if json {
        return print_json(&json!({ "recipe": recipe, "favorite": favorite }));
    }

    let star = if favorite { " *" } else { "" };
    println!("\n{}{star}", recipe.title);
    println!("{}", "=".repeat(60));
    println!("{}", meta_line(recipe));
    println!("Difficulty: {}", recipe.difficulty);
    if let Some(score) = recipe.health_score {
        println!("Health score: {score:.0}");
    }
    if let Some(image) = &recipe.image_url {
        println!("Image: {image}");
    }
    println!("\n{}", recipe.description);

    if !recipe.ingredients.is_empty() {
        println!("\nIngredients:");
        for ingredient in &recipe.ingredients {
            println!("  - {}", ingredient.text);
        }
    }
    if !recipe.instructions.is_empty() {
        println!("\nInstructions:");
        for (number, step) in recipe.instructions.iter().enumerate() {
            println!("  {}. {step}", number + 1);
        }
    }
    Ok(())
}

/// Print a generation outcome; failures print their fallback stub
pub fn print_generation(result: &GenerationResult, json: bool) -> Result<()> {
    let status = match result {
        GenerationResult::Success(_) => "success",
        GenerationResult::EmptyResult(_) => "empty_result",
        GenerationResult::ProviderError(_) => "provider_error",
    };
    let recipe = result.render();

    if json {
        let error = match result {
            GenerationResult::ProviderError(e) => Some(e.to_string()),
            GenerationResult::Success(_) | GenerationResult::EmptyResult(_) => None,
        };
        return print_json(&json!({ "status": status, "recipe": recipe, "error": error }));
    }

    print_recipe_detail(&recipe, false, false)?;
    match result {
        GenerationResult::Success(recipe) => {
            println!("\nSave it with: recipe-finder favorites toggle {}", recipe.id);
        }
        GenerationResult::EmptyResult(_) => {
            println!("\nTry different or fewer ingredients.");
        }
        GenerationResult::ProviderError(_) => {}
    }
    Ok(())
}

/// Print favorites in favoriting order
pub fn print_favorites(favorites: &FavoritesSet, json: bool) -> Result<()> {
    if json {
        return print_json(favorites);
    }
    if favorites.is_empty() {
        println!("You do not have any favorite recipes yet. Browse and add some!");
        return Ok(());
    }
    for entry in favorites {
        let pending = if entry.needs_refresh {
            " (run `favorites refresh` for details)"
        } else {
            ""
        };
        println!(
            "{:<24} {}{pending}  [{}]",
            entry.id,
            entry.snapshot.title,
            entry.favorited_at.format("%Y-%m-%d")
        );
    }
    Ok(())
}

/// Print the outcome of a favorites refresh
pub fn print_refresh_report(report: &RefreshReport, json: bool) -> Result<()> {
    if json {
        let failed = report
            .failed
            .iter()
            .map(|(id, error)| json!({ "id": id, "error": error }))
            .collect::<Vec<_>>();
        return print_json(&json!({
            "refreshed": report.refreshed,
            "failed": failed,
            "favorites": report.favorites,
        }));
    }

    println!("Refreshed {} favorites", report.refreshed.len());
    for (id, error) in &report.failed {
        println!("  could not refresh {id}: {error}");
    }
    print_favorites(&report.favorites, false)
}
