// ABOUTME: TheMealDB record normalization into the canonical recipe
// ABOUTME: Projects the twenty sparse ingredient slots onto a dense ingredient list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeSet;

use super::{non_blank, or_placeholder_steps};
use crate::constants::recipes::{
    DEFAULT_DESCRIPTION, DEFAULT_SERVINGS, INGREDIENT_MEASURE_SEPARATOR, UNTITLED_RECIPE,
};
use crate::mealdb::{MealRecord, MealSlot};
use crate::models::{Difficulty, Ingredient, ProviderTag, Recipe, RecipeId};

/// Categories that imply a dietary tag
static DIETARY_CATEGORIES: [(&str, &str); 2] = [("Vegetarian", "vegetarian"), ("Vegan", "vegan")];

pub(super) fn normalize_meal(meal: &MealRecord) -> Recipe {
    let id = RecipeId::new(ProviderTag::MealDb, meal.id.trim());
    let category = non_blank(meal.category.as_deref());

    let dietary_tags: BTreeSet<String> = category
        .and_then(|category| {
            DIETARY_CATEGORIES
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(category))
        })
        .map(|(_, tag)| (*tag).to_owned())
        .into_iter()
        .collect();

    Recipe {
        id: id.to_string(),
        title: non_blank(meal.name.as_deref()).unwrap_or(UNTITLED_RECIPE).to_owned(),
        image_url: non_blank(meal.thumbnail.as_deref()).map(str::to_owned),
        description: DEFAULT_DESCRIPTION.to_owned(),
        ingredients: ingredient_lines(&meal.slots),
        instructions: or_placeholder_steps(instruction_steps(meal.instructions.as_deref())),
        cook_time_minutes: 0,
        servings: DEFAULT_SERVINGS,
        dietary_tags,
        difficulty: Difficulty::Medium,
        source_provider: Some(ProviderTag::MealDb),
        category: category.map(str::to_owned),
        area: non_blank(meal.area.as_deref()).map(str::to_owned),
        health_score: None,
    }
}

/// Dense ingredient lines from the positional slots, skipping empty ingredients
fn ingredient_lines(slots: &[MealSlot]) -> Vec<Ingredient> {
    slots
        .iter()
        .filter_map(|slot| {
            let ingredient = non_blank(slot.ingredient.as_deref())?;
            let measure = slot.measure.as_deref().map_or("", str::trim);
            Some(Ingredient::new(format!(
                "{ingredient}{INGREDIENT_MEASURE_SEPARATOR}{measure}"
            )))
        })
        .collect()
}

fn instruction_steps(text: Option<&str>) -> Vec<String> {
    text.map(|text| {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect()
    })
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_steps_drop_blank_lines() {
        let steps = instruction_steps(Some("Preheat oven.\r\n\r\n  Mix well. \nBake."));
        assert_eq!(steps, vec!["Preheat oven.", "Mix well.", "Bake."]);
    }

    #[test]
    fn test_vegan_category_adds_tag() {
        let mut meal = MealRecord::with_id("1");
        meal.category = Some("Vegan".to_owned());
        let recipe = normalize_meal(&meal);
        assert!(recipe.dietary_tags.contains("vegan"));
        assert_eq!(recipe.category.as_deref(), Some("Vegan"));
    }
}
