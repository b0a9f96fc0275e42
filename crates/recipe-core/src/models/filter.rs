// ABOUTME: Browse-screen filter state and its URL-parameter projection
// ABOUTME: Tracks query, diet, cuisine, intolerances, and included ingredients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// URL parameter names used by the browse screen
pub mod params {
    /// Free-text query
    pub const QUERY: &str = "query";
    /// Diet name
    pub const DIET: &str = "diet";
    /// Cuisine name
    pub const CUISINE: &str = "cuisine";
    /// Comma-separated intolerances
    pub const INTOLERANCES: &str = "intolerances";
    /// Comma-separated ingredients to include
    pub const INGREDIENTS: &str = "ingredients";
}

/// Filter state of the browse screen
///
/// Every field is optional. A field counts as empty when it is absent or
/// whitespace-only; a filter with every field empty means "show the curated
/// defaults".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilter {
    /// Free-text recipe query
    pub query: Option<String>,
    /// Diet restriction such as `vegetarian`
    pub diet: Option<String>,
    /// Cuisine such as `italian`
    pub cuisine: Option<String>,
    /// Intolerances such as `Dairy`
    pub intolerances: BTreeSet<String>,
    /// Ingredients the recipe must include
    pub ingredients: BTreeSet<String>,
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.trim().is_empty())
}

fn non_blank_items(set: &BTreeSet<String>) -> impl Iterator<Item = &str> {
    set.iter().map(String::as_str).filter(|v| !v.trim().is_empty())
}

fn split_list(value: &str) -> BTreeSet<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}

impl SearchFilter {
    /// Query, if set and not blank
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        non_blank(self.query.as_ref())
    }

    /// Diet, if set and not blank
    #[must_use]
    pub fn diet(&self) -> Option<&str> {
        non_blank(self.diet.as_ref())
    }

    /// Cuisine, if set and not blank
    #[must_use]
    pub fn cuisine(&self) -> Option<&str> {
        non_blank(self.cuisine.as_ref())
    }

    /// Non-blank intolerances in sorted order
    pub fn intolerances(&self) -> impl Iterator<Item = &str> {
        non_blank_items(&self.intolerances)
    }

    /// Non-blank included ingredients in sorted order
    pub fn ingredients(&self) -> impl Iterator<Item = &str> {
        non_blank_items(&self.ingredients)
    }

    /// Whether every field is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.query().is_none()
            && self.diet().is_none()
            && self.cuisine().is_none()
            && self.intolerances().next().is_none()
            && self.ingredients().next().is_none()
    }

    /// Whether any of the advanced filters (diet, cuisine, intolerances) is set
    #[must_use]
    pub fn has_advanced_filters(&self) -> bool {
        self.diet().is_some() || self.cuisine().is_some() || self.intolerances().next().is_some()
    }

    /// Add the intolerance if absent, remove it if present
    ///
    /// Returns whether the intolerance is selected afterwards. Blank input is
    /// ignored.
    pub fn toggle_intolerance(&mut self, intolerance: &str) -> bool {
        let item = intolerance.trim();
        if item.is_empty() {
            return false;
        }
        if self.intolerances.remove(item) {
            false
        } else {
            self.intolerances.insert(item.to_owned());
            true
        }
    }

    /// Reset every field
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Build a filter from URL query parameters
    ///
    /// Unknown keys are ignored. List parameters are comma-split and empty
    /// items dropped. A repeated key keeps its last value.
    pub fn from_params<'a, I>(params: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut filter = Self::default();
        for (key, value) in params {
            let text = (!value.trim().is_empty()).then(|| value.to_owned());
            match key {
                params::QUERY => filter.query = text,
                params::DIET => filter.diet = text,
                params::CUISINE => filter.cuisine = text,
                params::INTOLERANCES => filter.intolerances = split_list(value),
                params::INGREDIENTS => filter.ingredients = split_list(value),
                _ => {}
            }
        }
        filter
    }

    /// Project the filter back to URL query parameters, omitting empty fields
    #[must_use]
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        if let Some(query) = self.query() {
            out.push((params::QUERY, query.to_owned()));
        }
        if let Some(diet) = self.diet() {
            out.push((params::DIET, diet.to_owned()));
        }
        if let Some(cuisine) = self.cuisine() {
            out.push((params::CUISINE, cuisine.to_owned()));
        }
        let intolerances = self.intolerances().collect::<Vec<_>>();
        if !intolerances.is_empty() {
            out.push((params::INTOLERANCES, intolerances.join(",")));
        }
        let ingredients = self.ingredients().collect::<Vec<_>>();
        if !ingredients.is_empty() {
            out.push((params::INGREDIENTS, ingredients.join(",")));
        }
        out
    }
}
