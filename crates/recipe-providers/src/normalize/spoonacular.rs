// ABOUTME: Spoonacular payload normalization into the canonical recipe
// ABOUTME: Handles ingredient-match merges, full detail payloads, and search result cards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeSet;

use super::html::strip_html;
use super::{non_blank, or_placeholder_steps};
use crate::constants::recipes::{DEFAULT_DESCRIPTION, DEFAULT_SERVINGS, UNTITLED_RECIPE};
use crate::models::{Difficulty, Ingredient, ProviderTag, Recipe, RecipeId};
use crate::spoonacular::{
    IngredientCandidate, IngredientLine, InstructionGroup, RecipeInformation, SearchResultCard,
};

/// Dietary flags shared by detail payloads and result cards
#[derive(Debug, Clone, Copy, Default)]
struct DietaryFlags {
    vegetarian: Option<bool>,
    vegan: Option<bool>,
    gluten_free: Option<bool>,
    dairy_free: Option<bool>,
}

impl DietaryFlags {
    const fn of_information(detail: &RecipeInformation) -> Self {
        Self {
            vegetarian: detail.vegetarian,
            vegan: detail.vegan,
            gluten_free: detail.gluten_free,
            dairy_free: detail.dairy_free,
        }
    }

    const fn of_card(card: &SearchResultCard) -> Self {
        Self {
            vegetarian: card.vegetarian,
            vegan: card.vegan,
            gluten_free: card.gluten_free,
            dairy_free: card.dairy_free,
        }
    }

    fn tags(self) -> BTreeSet<String> {
        [
            (self.vegetarian, "vegetarian"),
            (self.vegan, "vegan"),
            (self.gluten_free, "gluten-free"),
            (self.dairy_free, "dairy-free"),
        ]
        .into_iter()
        .filter(|(flag, _)| flag.unwrap_or(false))
        .map(|(_, tag)| tag.to_owned())
        .collect()
    }
}

/// Candidate ingredients merged with detail summary, instructions and flags
pub(super) fn normalize_ingredient_match(
    candidate: &IngredientCandidate,
    detail: &RecipeInformation,
) -> Recipe {
    let ingredients = candidate
        .used_ingredients
        .iter()
        .flatten()
        .chain(candidate.missed_ingredients.iter().flatten())
        .filter_map(ingredient_line)
        .collect();

    let mut recipe = normalize_information(detail);
    recipe.id = RecipeId::new(ProviderTag::Spoonacular, candidate.id.to_string()).to_string();
    if let Some(title) = non_blank(candidate.title.as_deref()) {
        title.clone_into(&mut recipe.title);
    }
    if let Some(image) = non_blank(candidate.image.as_deref()) {
        recipe.image_url = Some(image.to_owned());
    }
    recipe.ingredients = ingredients;
    recipe
}

/// Full detail payload from the recipe-detail screen
pub(super) fn normalize_information(detail: &RecipeInformation) -> Recipe {
    Recipe {
        id: RecipeId::new(ProviderTag::Spoonacular, detail.id.to_string()).to_string(),
        title: non_blank(detail.title.as_deref()).unwrap_or(UNTITLED_RECIPE).to_owned(),
        image_url: non_blank(detail.image.as_deref()).map(str::to_owned),
        description: description(detail.summary.as_deref()),
        ingredients: detail
            .extended_ingredients
            .iter()
            .flatten()
            .filter_map(ingredient_line)
            .collect(),
        instructions: or_placeholder_steps(first_group_steps(
            detail.analyzed_instructions.as_deref(),
        )),
        cook_time_minutes: detail.ready_in_minutes.unwrap_or(0),
        servings: servings(detail.servings),
        dietary_tags: DietaryFlags::of_information(detail).tags(),
        difficulty: Difficulty::Medium,
        source_provider: Some(ProviderTag::Spoonacular),
        category: None,
        area: None,
        health_score: detail.health_score,
    }
}

/// Result card: no ingredients or instructions, only card metadata
pub(super) fn normalize_search_result(card: &SearchResultCard) -> Recipe {
    Recipe {
        id: RecipeId::new(ProviderTag::Spoonacular, card.id.to_string()).to_string(),
        title: non_blank(card.title.as_deref()).unwrap_or(UNTITLED_RECIPE).to_owned(),
        image_url: non_blank(card.image.as_deref()).map(str::to_owned),
        description: DEFAULT_DESCRIPTION.to_owned(),
        ingredients: Vec::new(),
        instructions: or_placeholder_steps(Vec::new()),
        cook_time_minutes: card.ready_in_minutes.unwrap_or(0),
        servings: servings(card.servings),
        dietary_tags: DietaryFlags::of_card(card).tags(),
        difficulty: Difficulty::Medium,
        source_provider: Some(ProviderTag::Spoonacular),
        category: None,
        area: None,
        health_score: None,
    }
}

/// `original` text, or `"<amount> <unit> <name>"` built from whatever parts exist
fn ingredient_line(line: &IngredientLine) -> Option<Ingredient> {
    if let Some(original) = non_blank(line.original.as_deref()) {
        return Some(Ingredient::new(original));
    }
    let amount = line.amount.map(|amount| amount.to_string());
    let parts: Vec<&str> = [
        amount.as_deref(),
        non_blank(line.unit.as_deref()),
        non_blank(line.name.as_deref()),
    ]
    .into_iter()
    .flatten()
    .collect();
    (!parts.is_empty()).then(|| Ingredient::new(parts.join(" ")))
}

fn first_group_steps(groups: Option<&[InstructionGroup]>) -> Vec<String> {
    groups
        .and_then(<[InstructionGroup]>::first)
        .and_then(|group| group.steps.as_ref())
        .map(|steps| {
            steps
                .iter()
                .filter_map(|step| non_blank(step.step.as_deref()).map(str::to_owned))
                .collect()
        })
        .unwrap_or_default()
}

fn description(summary: Option<&str>) -> String {
    let text = summary.map(strip_html).unwrap_or_default();
    if text.is_empty() {
        DEFAULT_DESCRIPTION.to_owned()
    } else {
        text
    }
}

fn servings(value: Option<u32>) -> u32 {
    value.map_or(DEFAULT_SERVINGS, |servings| servings.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spoonacular::InstructionStep;

    #[test]
    fn test_ingredient_line_prefers_original() {
        let line = IngredientLine {
            original: Some("2 cups flour, sifted".to_owned()),
            amount: Some(2.0),
            unit: Some("cups".to_owned()),
            name: Some("flour".to_owned()),
        };
        assert_eq!(
            ingredient_line(&line).map(|i| i.text),
            Some("2 cups flour, sifted".to_owned())
        );
    }

    #[test]
    fn test_ingredient_line_built_from_parts() {
        let line = IngredientLine {
            original: None,
            amount: Some(0.5),
            unit: Some("tsp".to_owned()),
            name: Some("salt".to_owned()),
        };
        assert_eq!(
            ingredient_line(&line).map(|i| i.text),
            Some("0.5 tsp salt".to_owned())
        );

        let whole = IngredientLine {
            amount: Some(2.0),
            name: Some("eggs".to_owned()),
            ..IngredientLine::default()
        };
        assert_eq!(ingredient_line(&whole).map(|i| i.text), Some("2 eggs".to_owned()));
        assert!(ingredient_line(&IngredientLine::default()).is_none());
    }

    #[test]
    fn test_only_first_instruction_group_used() {
        let groups = vec![
            InstructionGroup {
                name: None,
                steps: Some(vec![
                    InstructionStep {
                        number: Some(1),
                        step: Some("Boil water.".to_owned()),
                    },
                    InstructionStep {
                        number: Some(2),
                        step: Some("Add pasta.".to_owned()),
                    },
                ]),
            },
            InstructionGroup {
                name: Some("Sauce".to_owned()),
                steps: Some(vec![InstructionStep {
                    number: Some(1),
                    step: Some("Simmer.".to_owned()),
                }]),
            },
        ];
        assert_eq!(first_group_steps(Some(groups.as_slice())), vec!["Boil water.", "Add pasta."]);
    }

    #[test]
    fn test_blank_summary_uses_default() {
        assert_eq!(description(Some("<p> </p>")), DEFAULT_DESCRIPTION);
        assert_eq!(description(None), DEFAULT_DESCRIPTION);
    }

    #[test]
    fn test_zero_servings_clamped() {
        assert_eq!(servings(Some(0)), 1);
        assert_eq!(servings(None), DEFAULT_SERVINGS);
    }
}
