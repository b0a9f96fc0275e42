// ABOUTME: Curated popular recipes shown when no search filter is active
// ABOUTME: Fixed result cards normalized through the same path as live search results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_providers::{normalize, RawRecipe, SearchResultCard};

use crate::models::Recipe;

struct SampleCard {
    id: u64,
    title: &'static str,
    image: &'static str,
    ready_in_minutes: u32,
    servings: u32,
    vegetarian: bool,
    vegan: bool,
    gluten_free: bool,
    dairy_free: bool,
}

const POPULAR: [SampleCard; 6] = [
    SampleCard {
        id: 1,
        title: "Strawberry Cheesecake",
        image: "/images/cheesecake.jpg",
        ready_in_minutes: 60,
        servings: 8,
        vegetarian: true,
        vegan: false,
        gluten_free: false,
        dairy_free: false,
    },
    SampleCard {
        id: 2,
        title: "Pink Lemonade Cupcakes",
        image: "/images/cupcakes.jpg",
        ready_in_minutes: 45,
        servings: 12,
        vegetarian: true,
        vegan: false,
        gluten_free: false,
        dairy_free: false,
    },
    SampleCard {
        id: 3,
        title: "Berry Smoothie Bowl",
        image: "/images/smoothie.jpg",
        ready_in_minutes: 15,
        servings: 1,
        vegetarian: true,
        vegan: true,
        gluten_free: true,
        dairy_free: true,
    },
    SampleCard {
        id: 4,
        title: "Raspberry Chocolate Cake",
        image: "/images/raspberry.jpg",
        ready_in_minutes: 75,
        servings: 10,
        vegetarian: true,
        vegan: false,
        gluten_free: false,
        dairy_free: false,
    },
    SampleCard {
        id: 5,
        title: "Avocado Rose Toast",
        image: "/images/toast.jpg",
        ready_in_minutes: 20,
        servings: 2,
        vegetarian: true,
        vegan: true,
        gluten_free: true,
        dairy_free: true,
    },
    SampleCard {
        id: 6,
        title: "Lavender Macarons",
        image: "/images/macarons.jpg",
        ready_in_minutes: 90,
        servings: 24,
        vegetarian: true,
        vegan: false,
        gluten_free: true,
        dairy_free: false,
    },
];

impl SampleCard {
    fn to_card(&self) -> SearchResultCard {
        SearchResultCard {
            id: self.id,
            title: Some(self.title.to_owned()),
            image: Some(self.image.to_owned()),
            ready_in_minutes: Some(self.ready_in_minutes),
            servings: Some(self.servings),
            vegetarian: Some(self.vegetarian),
            vegan: Some(self.vegan),
            gluten_free: Some(self.gluten_free),
            dairy_free: Some(self.dairy_free),
        }
    }
}

/// The curated recipe list, in display order
#[must_use]
pub fn popular_recipes() -> Vec<Recipe> {
    POPULAR
        .iter()
        .map(|sample| normalize(&RawRecipe::SearchResult(sample.to_card())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popular_recipes_are_favoritable() {
        let recipes = popular_recipes();
        assert_eq!(recipes.len(), 6);
        assert_eq!(recipes[0].id, "spoonacular:1");
        assert!(recipes.iter().all(|r| r.recipe_id().is_some()));
        assert!(recipes[2].dietary_tags.contains("vegan"));
    }
}
