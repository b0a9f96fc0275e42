// ABOUTME: Canonical provider-agnostic recipe model with namespaced identity
// ABOUTME: Defines Recipe, RecipeId, ProviderTag, Difficulty, and Ingredient
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::constants::provider_tags;

/// Which provider adapter produced a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderTag {
    /// Ingredient-match provider with numeric native ids
    Spoonacular,
    /// Name/category provider with opaque string native ids
    #[serde(rename = "mealdb")]
    MealDb,
}

impl ProviderTag {
    /// Namespace prefix used in canonical ids
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Spoonacular => provider_tags::SPOONACULAR,
            Self::MealDb => provider_tags::MEALDB,
        }
    }
}

impl fmt::Display for ProviderTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderTag {
    type Err = RecipeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            provider_tags::SPOONACULAR => Ok(Self::Spoonacular),
            provider_tags::MEALDB => Ok(Self::MealDb),
            other => Err(RecipeIdError::UnknownProvider(other.to_owned())),
        }
    }
}

/// Reasons a canonical recipe id string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecipeIdError {
    /// No `:` separator between provider tag and native id
    #[error("recipe id '{0}' is not namespaced as <provider>:<id>")]
    MissingNamespace(String),
    /// The namespace is not a known provider
    #[error("unknown recipe provider '{0}'")]
    UnknownProvider(String),
    /// The native id part is empty
    #[error("recipe id '{0}' has an empty native id")]
    EmptyNativeId(String),
}

/// Canonical recipe identity: a provider namespace plus that provider's own id
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecipeId {
    provider: ProviderTag,
    native_id: String,
}

impl RecipeId {
    /// Build an id in the given provider namespace
    pub fn new(provider: ProviderTag, native_id: impl Into<String>) -> Self {
        Self {
            provider,
            native_id: native_id.into(),
        }
    }

    /// Namespace of this id
    #[must_use]
    pub const fn provider(&self) -> ProviderTag {
        self.provider
    }

    /// Provider-native part of this id
    #[must_use]
    pub fn native_id(&self) -> &str {
        &self.native_id
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.provider, self.native_id)
    }
}

impl FromStr for RecipeId {
    type Err = RecipeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (tag, native) = s
            .split_once(':')
            .ok_or_else(|| RecipeIdError::MissingNamespace(s.to_owned()))?;
        let provider = tag.parse::<ProviderTag>()?;
        if native.trim().is_empty() {
            return Err(RecipeIdError::EmptyNativeId(s.to_owned()));
        }
        Ok(Self::new(provider, native))
    }
}

impl TryFrom<String> for RecipeId {
    type Error = RecipeIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RecipeId> for String {
    fn from(id: RecipeId) -> Self {
        id.to_string()
    }
}

/// Recipe difficulty; providers never supply it, so real recipes report `Medium`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    /// Easy
    Easy,
    /// Medium
    #[default]
    Medium,
    /// Hard
    Hard,
    /// Fallback stubs only
    #[serde(rename = "N/A")]
    Unknown,
}

impl Difficulty {
    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Unknown => "N/A",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One free-form "quantity + name" ingredient line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Display text
    pub text: String,
}

impl Ingredient {
    /// Create an ingredient line
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Canonical, provider-agnostic recipe
///
/// Produced only by the provider normalizers or the fallback stub
/// constructors. Ingredient and instruction order is the source order and is
/// never changed after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Namespaced id, `<provider>:<native id>`
    pub id: String,
    /// Recipe name
    pub title: String,
    /// Image URL, if the provider has one
    pub image_url: Option<String>,
    /// Plain-text description
    pub description: String,
    /// Ingredient lines in source order
    pub ingredients: Vec<Ingredient>,
    /// Instruction steps in source order
    pub instructions: Vec<String>,
    /// Total time in minutes, 0 when not specified
    pub cook_time_minutes: u32,
    /// Number of servings, at least 1
    pub servings: u32,
    /// Dietary tags such as `vegetarian` or `gluten-free`
    pub dietary_tags: BTreeSet<String>,
    /// Difficulty label
    pub difficulty: Difficulty,
    /// Adapter that produced this recipe; `None` only for fallback stubs
    pub source_provider: Option<ProviderTag>,
    /// Meal category (name/category provider)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Regional cuisine (name/category provider)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    /// Provider health score (ingredient-match provider)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_score: Option<f64>,
}

impl Recipe {
    /// Build a renderable fallback stub: no provider, no ingredients, no
    /// instructions, difficulty `N/A`
    pub fn fallback_stub(
        kind: &str,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: format!("fallback:{kind}"),
            title: title.into(),
            image_url: None,
            description: description.into(),
            ingredients: Vec::new(),
            instructions: Vec::new(),
            cook_time_minutes: 0,
            servings: 1,
            dietary_tags: BTreeSet::new(),
            difficulty: Difficulty::Unknown,
            source_provider: None,
            category: None,
            area: None,
            health_score: None,
        }
    }

    /// Canonical id, if this recipe came from a provider and its id lives in
    /// that provider's namespace
    #[must_use]
    pub fn recipe_id(&self) -> Option<RecipeId> {
        let provider = self.source_provider?;
        let id = self.id.parse::<RecipeId>().ok()?;
        (id.provider() == provider).then_some(id)
    }

    /// Whether this is a fallback stub rather than provider data
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        self.source_provider.is_none()
    }
}
