// ABOUTME: TheMealDB HTTP client implementing the meal-catalog provider trait
// ABOUTME: Name search and lookup by id against the public v1 API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use super::dto::{MealRecord, MealsResponse};
use crate::constants::endpoints::MEALDB_API_BASE;
use crate::constants::provider_tags::MEALDB;
use crate::core::MealCatalogProvider;
use crate::errors::{ProviderError, ProviderResult};
use crate::http_client::{get_json, shared_client, ApiCall};

/// TheMealDB name/category provider
pub struct MealDbProvider {
    base_url: String,
    client: Client,
}

impl MealDbProvider {
    /// Provider against the public API on the shared HTTP client
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(MEALDB_API_BASE)
    }

    /// Provider against another base URL on the shared HTTP client
    #[must_use]
    pub fn with_base_url(base_url: &str) -> Self {
        Self::with_client(base_url, shared_client().clone())
    }

    /// Provider on a caller-supplied HTTP client
    #[must_use]
    pub fn with_client(base_url: &str, client: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            client,
        }
    }

    async fn meals(
        &self,
        path: &str,
        call: ApiCall<'_>,
        params: &[(&str, String)],
    ) -> ProviderResult<Vec<MealRecord>> {
        let url = format!("{}{path}", self.base_url);
        let response: MealsResponse = get_json(&self.client, call, &url, params).await?;
        Ok(response.meals.unwrap_or_default())
    }
}

impl Default for MealDbProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MealCatalogProvider for MealDbProvider {
    #[instrument(skip(self), fields(provider = "mealdb", api_call = "search"))]
    async fn search(&self, term: &str) -> ProviderResult<Vec<MealRecord>> {
        let call = ApiCall {
            provider: MEALDB,
            resource_type: "meals",
            resource_id: term,
        };
        let meals = self
            .meals("/search.php", call, &[("s", term.to_owned())])
            .await?;
        debug!("Meal search matched {} meals", meals.len());
        Ok(meals)
    }

    #[instrument(skip(self), fields(provider = "mealdb", api_call = "lookup"))]
    async fn lookup(&self, native_id: &str) -> ProviderResult<MealRecord> {
        let call = ApiCall {
            provider: MEALDB,
            resource_type: "meal",
            resource_id: native_id,
        };
        self.meals("/lookup.php", call, &[("i", native_id.to_owned())])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::NotFound {
                provider: MEALDB.to_owned(),
                resource_type: "meal".to_owned(),
                resource_id: native_id.to_owned(),
            })
    }
}
