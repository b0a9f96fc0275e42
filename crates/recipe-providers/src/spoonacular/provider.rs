// ABOUTME: Spoonacular HTTP client implementing the ingredient-match provider trait
// ABOUTME: findByIngredients, recipe information, and complexSearch with API-key auth
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, instrument};

use super::dto::{ComplexSearchResponse, IngredientCandidate, RecipeInformation, SearchResultCard};
use crate::constants::endpoints::SPOONACULAR_API_BASE;
use crate::constants::provider_tags::SPOONACULAR;
use crate::core::{IngredientMatchProvider, ProviderQuery};
use crate::errors::{ProviderError, ProviderResult};
use crate::http_client::{get_json, shared_client, ApiCall};

/// Connection settings for Spoonacular
#[derive(Debug, Clone)]
pub struct SpoonacularConfig {
    /// API key; calls fail with a configuration error when absent
    pub api_key: Option<String>,
    /// Base URL without trailing slash
    pub base_url: String,
}

impl Default for SpoonacularConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: SPOONACULAR_API_BASE.to_owned(),
        }
    }
}

/// Spoonacular ingredient-match provider
pub struct SpoonacularProvider {
    config: SpoonacularConfig,
    client: Client,
}

impl SpoonacularProvider {
    /// Create a provider on the shared HTTP client
    #[must_use]
    pub fn new(config: SpoonacularConfig) -> Self {
        Self::with_client(config, shared_client().clone())
    }

    /// Create a provider on a caller-supplied HTTP client
    #[must_use]
    pub fn with_client(mut config: SpoonacularConfig, client: Client) -> Self {
        let trimmed = config.base_url.trim_end_matches('/').len();
        config.base_url.truncate(trimmed);
        Self { config, client }
    }

    /// Whether an API key is configured
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.config
            .api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }

    fn api_key(&self) -> ProviderResult<&str> {
        self.config
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ProviderError::ConfigurationError {
                provider: SPOONACULAR.to_owned(),
                details: "SPOONACULAR_API_KEY is not set".to_owned(),
            })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url)
    }
}

#[async_trait]
impl IngredientMatchProvider for SpoonacularProvider {
    #[instrument(
        skip(self, ingredients),
        fields(
            provider = "spoonacular",
            api_call = "find_by_ingredients",
            count = ingredients.len()
        )
    )]
    async fn find_by_ingredients(
        &self,
        ingredients: &[String],
        limit: u32,
    ) -> ProviderResult<Vec<IngredientCandidate>> {
        let api_key = self.api_key()?;
        let joined = ingredients.join(",");
        let params = [
            ("ingredients", joined.clone()),
            ("number", limit.to_string()),
            ("apiKey", api_key.to_owned()),
        ];
        let call = ApiCall {
            provider: SPOONACULAR,
            resource_type: "ingredient candidates",
            resource_id: &joined,
        };
        let candidates: Vec<IngredientCandidate> = get_json(
            &self.client,
            call,
            &self.url("/recipes/findByIngredients"),
            &params,
        )
        .await?;
        info!("Found {} ingredient candidates", candidates.len());
        Ok(candidates)
    }

    #[instrument(skip(self), fields(provider = "spoonacular", api_call = "recipe_information"))]
    async fn recipe_information(&self, native_id: u64) -> ProviderResult<RecipeInformation> {
        let api_key = self.api_key()?;
        let id = native_id.to_string();
        let call = ApiCall {
            provider: SPOONACULAR,
            resource_type: "recipe information",
            resource_id: &id,
        };
        get_json(
            &self.client,
            call,
            &self.url(&format!("/recipes/{native_id}/information")),
            &[("apiKey", api_key.to_owned())],
        )
        .await
    }

    #[instrument(skip(self, query), fields(provider = "spoonacular", api_call = "complex_search"))]
    async fn complex_search(&self, query: &ProviderQuery) -> ProviderResult<Vec<SearchResultCard>> {
        let api_key = self.api_key()?;
        let mut params = query.to_params();
        params.push(("addRecipeInformation", "true".to_owned()));
        params.push(("apiKey", api_key.to_owned()));

        let description = query.query.clone().unwrap_or_default();
        let call = ApiCall {
            provider: SPOONACULAR,
            resource_type: "search results",
            resource_id: &description,
        };
        let response: ComplexSearchResponse = get_json(
            &self.client,
            call,
            &self.url("/recipes/complexSearch"),
            &params,
        )
        .await?;
        let results = response.results.unwrap_or_default();
        info!("Complex search returned {} results", results.len());
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_api_key_is_configuration_error() {
        let provider =
            SpoonacularProvider::with_client(SpoonacularConfig::default(), Client::new());
        assert!(!provider.is_configured());

        let error = provider.recipe_information(5).await.unwrap_err();
        assert!(matches!(error, ProviderError::ConfigurationError { .. }));
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let provider = SpoonacularProvider::with_client(
            SpoonacularConfig {
                api_key: Some("key".to_owned()),
                base_url: "http://localhost:8080/".to_owned(),
            },
            Client::new(),
        );
        assert_eq!(
            provider.url("/recipes/complexSearch"),
            "http://localhost:8080/recipes/complexSearch"
        );
    }
}
