// ABOUTME: Ingredient-driven recipe generation request and outcome types
// ABOUTME: Normalizes user ingredient input and renders every outcome as a recipe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::recipe::Recipe;
use crate::constants::generation::{
    DEFAULT_COOK_TIME_MINUTES, DEFAULT_SERVINGS, EMPTY_STUB_TITLE, ERROR_STUB_DESCRIPTION,
    ERROR_STUB_TITLE,
};
use crate::errors::ProviderError;

/// What the user asked the generator for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    ingredients: Vec<String>,
    servings: u32,
    cook_time_minutes: u32,
}

impl GenerationRequest {
    /// Build a request from raw ingredient input
    ///
    /// Ingredients are trimmed; blanks and repeats are dropped with the first
    /// occurrence kept in place.
    pub fn new<I, S>(ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cleaned: Vec<String> = Vec::new();
        for raw in ingredients {
            let item = raw.as_ref().trim();
            if !item.is_empty() && !cleaned.iter().any(|existing| existing == item) {
                cleaned.push(item.to_owned());
            }
        }
        Self {
            ingredients: cleaned,
            servings: DEFAULT_SERVINGS,
            cook_time_minutes: DEFAULT_COOK_TIME_MINUTES,
        }
    }

    /// Requested servings, clamped to at least one
    #[must_use]
    pub fn with_servings(mut self, servings: u32) -> Self {
        self.servings = servings.max(1);
        self
    }

    /// Requested cook time in minutes
    #[must_use]
    pub const fn with_cook_time(mut self, minutes: u32) -> Self {
        self.cook_time_minutes = minutes;
        self
    }

    /// Cleaned ingredient list in input order
    #[must_use]
    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    /// Requested servings
    #[must_use]
    pub const fn servings(&self) -> u32 {
        self.servings
    }

    /// Requested cook time
    #[must_use]
    pub const fn cook_time_minutes(&self) -> u32 {
        self.cook_time_minutes
    }

    /// Whether no usable ingredient was given
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}

/// Outcome of one generation run
#[derive(Debug)]
pub enum GenerationResult {
    /// A merged recipe
    Success(Recipe),
    /// Nothing matched; the reason is user-facing guidance
    EmptyResult(String),
    /// A provider call failed
    ProviderError(ProviderError),
}

impl GenerationResult {
    /// The recipe, if this outcome may be favorited
    #[must_use]
    pub const fn favoritable(&self) -> Option<&Recipe> {
        match self {
            Self::Success(recipe) => Some(recipe),
            Self::EmptyResult(_) | Self::ProviderError(_) => None,
        }
    }

    /// Renderable recipe for this outcome; failures become fallback stubs
    #[must_use]
    pub fn render(&self) -> Recipe {
        match self {
            Self::Success(recipe) => recipe.clone(),
            Self::EmptyResult(reason) => {
                Recipe::fallback_stub("empty", EMPTY_STUB_TITLE, reason.as_str())
            }
            Self::ProviderError(_) => {
                Recipe::fallback_stub("error", ERROR_STUB_TITLE, ERROR_STUB_DESCRIPTION)
            }
        }
    }
}
