// ABOUTME: Application constants organized by domain
// ABOUTME: Provider tags, default endpoints, storage keys, and normalizer placeholder text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants shared by every crate in the workspace.

/// Provider namespace tags used in canonical recipe ids
pub mod provider_tags {
    /// Ingredient-match provider (Spoonacular), numeric native ids
    pub const SPOONACULAR: &str = "spoonacular";
    /// Name/category provider (TheMealDB), opaque string native ids
    pub const MEALDB: &str = "mealdb";
}

/// Default provider endpoints
pub mod endpoints {
    /// Spoonacular API base URL
    pub const SPOONACULAR_API_BASE: &str = "https://api.spoonacular.com";
    /// TheMealDB public API base URL
    pub const MEALDB_API_BASE: &str = "https://www.themealdb.com/api/json/v1/1";
}

/// HTTP client defaults
pub mod http {
    /// Default request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
    /// Default connection timeout in seconds
    pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
}

/// Recipe normalization defaults
pub mod recipes {
    /// Number of positional ingredient/measure slots in a TheMealDB record
    pub const MEAL_INGREDIENT_SLOTS: usize = 20;
    /// Separator between ingredient and measure in a TheMealDB ingredient line
    pub const INGREDIENT_MEASURE_SEPARATOR: &str = " — ";
    /// Description used when a provider supplies no summary
    pub const DEFAULT_DESCRIPTION: &str = "No description available.";
    /// Single instruction used when a provider supplies no instructions
    pub const NO_INSTRUCTIONS_PLACEHOLDER: &str = "No instructions available.";
    /// Title used when a provider record has no name
    pub const UNTITLED_RECIPE: &str = "Untitled recipe";
    /// Servings reported when a provider does not say
    pub const DEFAULT_SERVINGS: u32 = 1;
}

/// Generation pipeline constants
pub mod generation {
    /// Number of candidates requested from the ingredient search phase
    pub const CANDIDATE_LIMIT: u32 = 1;
    /// Servings used when the request does not specify any
    pub const DEFAULT_SERVINGS: u32 = 4;
    /// Cook time used when the request does not specify any
    pub const DEFAULT_COOK_TIME_MINUTES: u32 = 30;
    /// Reason attached to an empty search phase
    pub const NO_RECIPE_FOUND: &str = "no recipe found";
    /// Reason attached to a request without usable ingredients
    pub const NO_INGREDIENTS_PROVIDED: &str = "no ingredients provided";
    /// Title of the stub rendered for a provider failure
    pub const ERROR_STUB_TITLE: &str = "Error generating recipe";
    /// Title of the stub rendered for an empty result
    pub const EMPTY_STUB_TITLE: &str = "No recipe found";
    /// Description of the stub rendered for a provider failure
    pub const ERROR_STUB_DESCRIPTION: &str =
        "The recipe service could not be reached. Please try again.";
}

/// Persistent storage keys
pub mod storage_keys {
    /// Key holding the favorites collection (canonical and legacy formats)
    pub const FAVORITES: &str = "favorites";
    /// Key used by the legacy detail screen for saved recipe payloads
    pub const LEGACY_SAVED_RECIPES: &str = "saved_recipes";
}

/// Service identification for logging
pub mod service_names {
    /// Service name reported in structured logs
    pub const RECIPE_FINDER: &str = "recipe-finder";
}
