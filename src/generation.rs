// ABOUTME: Two-phase ingredient-to-recipe generation pipeline
// ABOUTME: Ingredient search then detail fetch, with observable state and a superseded-request guard
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Generation Pipeline
//!
//! ```text
//! Idle -> Searching -> EmptyResult
//!                   -> ProviderError
//!                   -> DetailFetching -> Success
//!                                     -> ProviderError
//! ```
//!
//! Phases run strictly in order with a single attempt each. Every invocation
//! takes a ticket from a monotonically increasing counter; when a phase
//! resolves and a newer invocation has started, the older one stops, returns
//! [`PipelineOutcome::Superseded`] and leaves the observable state alone.

use recipe_providers::{normalize, IngredientMatchProvider, RawRecipe};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

use crate::constants::generation::{CANDIDATE_LIMIT, NO_INGREDIENTS_PROVIDED, NO_RECIPE_FOUND};
use crate::models::{GenerationRequest, GenerationResult};

/// Observable pipeline state of the latest invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationState {
    /// Nothing running
    #[default]
    Idle,
    /// Ingredient search in flight
    Searching,
    /// Detail fetch in flight
    DetailFetching,
    /// Finished with nothing to show
    EmptyResult,
    /// Finished with a recipe
    Success,
    /// Finished with a provider failure
    ProviderError,
}

impl GenerationState {
    /// Whether the pipeline has finished
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::EmptyResult | Self::Success | Self::ProviderError)
    }

    const fn of_result(result: &GenerationResult) -> Self {
        match result {
            GenerationResult::Success(_) => Self::Success,
            GenerationResult::EmptyResult(_) => Self::EmptyResult,
            GenerationResult::ProviderError(_) => Self::ProviderError,
        }
    }
}

impl fmt::Display for GenerationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Idle => "idle",
            Self::Searching => "searching",
            Self::DetailFetching => "detail_fetching",
            Self::EmptyResult => "empty_result",
            Self::Success => "success",
            Self::ProviderError => "provider_error",
        };
        f.write_str(label)
    }
}

/// What one invocation produced
#[derive(Debug)]
pub enum PipelineOutcome {
    /// This invocation was still the latest when it finished
    Current(GenerationResult),
    /// A newer invocation started; this result was discarded
    Superseded {
        /// Ticket of this invocation
        request: u64,
        /// Ticket of the newest invocation when this one stopped
        latest: u64,
    },
}

impl PipelineOutcome {
    /// The result, unless superseded
    #[must_use]
    pub fn into_result(self) -> Option<GenerationResult> {
        match self {
            Self::Current(result) => Some(result),
            Self::Superseded { .. } => None,
        }
    }
}

/// Ingredient-driven recipe generation
pub struct GenerationPipeline {
    provider: Arc<dyn IngredientMatchProvider>,
    latest: AtomicU64,
    state: watch::Sender<GenerationState>,
}

impl GenerationPipeline {
    /// Pipeline over an ingredient-match provider
    #[must_use]
    pub fn new(provider: Arc<dyn IngredientMatchProvider>) -> Self {
        let (state, _) = watch::channel(GenerationState::Idle);
        Self {
            provider,
            latest: AtomicU64::new(0),
            state,
        }
    }

    /// Receiver for state changes of the latest invocation
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<GenerationState> {
        self.state.subscribe()
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> GenerationState {
        *self.state.borrow()
    }

    /// Run the pipeline for `request`
    ///
    /// Cook time and servings of a successful recipe come from the request.
    #[instrument(skip(self, request), fields(ingredients = request.ingredients().len()))]
    pub async fn generate(&self, request: &GenerationRequest) -> PipelineOutcome {
        let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        self.publish(ticket, GenerationState::Idle);

        if request.is_empty() {
            return self.finish(
                ticket,
                GenerationResult::EmptyResult(NO_INGREDIENTS_PROVIDED.to_owned()),
            );
        }

        self.publish(ticket, GenerationState::Searching);
        let candidates = self
            .provider
            .find_by_ingredients(request.ingredients(), CANDIDATE_LIMIT)
            .await;
        if let Some(superseded) = self.superseded(ticket) {
            return superseded;
        }

        let candidate = match candidates {
            Ok(candidates) => match candidates.into_iter().next() {
                Some(candidate) => candidate,
                None => {
                    return self.finish(
                        ticket,
                        GenerationResult::EmptyResult(NO_RECIPE_FOUND.to_owned()),
                    );
                }
            },
            Err(e) => {
                warn!(phase = "search", error = %e, "Generation failed");
                return self.finish(ticket, GenerationResult::ProviderError(e));
            }
        };

        self.publish(ticket, GenerationState::DetailFetching);
        let detail = self.provider.recipe_information(candidate.id).await;
        if let Some(superseded) = self.superseded(ticket) {
            return superseded;
        }

        let result = match detail {
            Ok(detail) => {
                let mut recipe = normalize(&RawRecipe::IngredientMatch { candidate, detail });
                recipe.cook_time_minutes = request.cook_time_minutes();
                recipe.servings = request.servings();
                info!(recipe_id = %recipe.id, "Generated recipe");
                GenerationResult::Success(recipe)
            }
            Err(e) => {
                warn!(phase = "detail", error = %e, "Generation failed");
                GenerationResult::ProviderError(e)
            }
        };
        self.finish(ticket, result)
    }

    fn is_latest(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket
    }

    fn publish(&self, ticket: u64, state: GenerationState) {
        if self.is_latest(ticket) {
            debug!(request = ticket, %state, "Generation state changed");
            self.state.send_replace(state);
        }
    }

    fn superseded(&self, ticket: u64) -> Option<PipelineOutcome> {
        let latest = self.latest.load(Ordering::SeqCst);
        (latest != ticket).then(|| {
            debug!(request = ticket, latest, "Discarding superseded generation");
            PipelineOutcome::Superseded {
                request: ticket,
                latest,
            }
        })
    }

    fn finish(&self, ticket: u64, result: GenerationResult) -> PipelineOutcome {
        if let Some(superseded) = self.superseded(ticket) {
            return superseded;
        }
        self.publish(ticket, GenerationState::of_result(&result));
        PipelineOutcome::Current(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(!GenerationState::Idle.is_terminal());
        assert!(!GenerationState::DetailFetching.is_terminal());
        assert!(GenerationState::EmptyResult.is_terminal());
        assert_eq!(GenerationState::DetailFetching.to_string(), "detail_fetching");
    }
}
