// ABOUTME: Shared test utilities and fake providers for integration tests
// ABOUTME: In-process provider fakes with call counters, fixtures, and a failing storage backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `recipe_finder`
//!
//! Fakes replace the HTTP provider clients so pipeline and store tests run
//! without a network and can count the calls that were made.

use async_trait::async_trait;
use recipe_finder::errors::{ProviderError, ProviderResult, StorageError};
use recipe_finder::storage::KeyValueStore;
use recipe_providers::{
    IngredientCandidate, IngredientLine, IngredientMatchProvider, InstructionGroup,
    InstructionStep, MealCatalogProvider, MealRecord, ProviderQuery, RecipeInformation,
    SearchResultCard,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::Notify;

/// Ingredient line with only the provider's original text
pub fn line(original: &str) -> IngredientLine {
    IngredientLine {
        original: Some(original.to_owned()),
        ..IngredientLine::default()
    }
}

/// Search-phase candidate
pub fn candidate(id: u64, used: &[&str], missed: &[&str]) -> IngredientCandidate {
    IngredientCandidate {
        id,
        title: Some(format!("Candidate {id}")),
        image: Some(format!("https://img.example/{id}.jpg")),
        used_ingredients: Some(used.iter().map(|text| line(text)).collect()),
        missed_ingredients: Some(missed.iter().map(|text| line(text)).collect()),
    }
}

/// Detail payload with a summary, one instruction group and vegetarian flag
pub fn detail(id: u64) -> RecipeInformation {
    RecipeInformation {
        id,
        title: Some(format!("Detail {id}")),
        summary: Some("A <b>quick</b> weeknight dish.".to_owned()),
        analyzed_instructions: Some(vec![InstructionGroup {
            name: None,
            steps: Some(vec![
                InstructionStep {
                    number: Some(1),
                    step: Some("Chop everything.".to_owned()),
                },
                InstructionStep {
                    number: Some(2),
                    step: Some("Cook it.".to_owned()),
                },
            ]),
        }]),
        servings: Some(2),
        ready_in_minutes: Some(25),
        vegetarian: Some(true),
        health_score: Some(42.0),
        ..RecipeInformation::default()
    }
}

/// Meal record with name and the given ingredients
pub fn meal(id: &str, name: &str, ingredients: &[(&str, &str)]) -> MealRecord {
    let mut record = MealRecord::with_id(id);
    record.name = Some(name.to_owned());
    record.instructions = Some("Step one.\r\n\r\nStep two.".to_owned());
    for (slot, (ingredient, measure)) in record.slots.iter_mut().zip(ingredients) {
        slot.ingredient = Some((*ingredient).to_owned());
        slot.measure = Some((*measure).to_owned());
    }
    record
}

fn network_error(what: &str) -> ProviderError {
    ProviderError::NetworkError(format!("{what}: connection refused"))
}

/// Scripted ingredient-match provider
///
/// `None` in a script slot makes that call fail with a network error.
#[derive(Default)]
pub struct FakeIngredientMatch {
    pub candidates: Option<Vec<IngredientCandidate>>,
    pub details: HashMap<u64, RecipeInformation>,
    pub cards: Option<Vec<SearchResultCard>>,
    pub search_calls: AtomicUsize,
    pub detail_calls: AtomicUsize,
    pub complex_calls: AtomicUsize,
    pub last_query: Mutex<Option<ProviderQuery>>,
    /// When set, the search phase waits for a notification before answering
    pub search_gate: Option<Notify>,
    /// When set, only the first detail call waits for a notification
    pub first_detail_gate: Option<Notify>,
}

impl FakeIngredientMatch {
    pub fn with_candidates(candidates: Vec<IngredientCandidate>) -> Self {
        Self {
            candidates: Some(candidates),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_detail(mut self, detail: RecipeInformation) -> Self {
        self.details.insert(detail.id, detail);
        self
    }

    pub fn search_count(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn detail_count(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }

    pub fn complex_count(&self) -> usize {
        self.complex_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IngredientMatchProvider for FakeIngredientMatch {
    async fn find_by_ingredients(
        &self,
        _ingredients: &[String],
        limit: u32,
    ) -> ProviderResult<Vec<IngredientCandidate>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.search_gate {
            gate.notified().await;
        }
        self.candidates
            .clone()
            .map(|mut candidates| {
                candidates.truncate(limit as usize);
                candidates
            })
            .ok_or_else(|| network_error("findByIngredients"))
    }

    async fn recipe_information(&self, native_id: u64) -> ProviderResult<RecipeInformation> {
        let previous_calls = self.detail_calls.fetch_add(1, Ordering::SeqCst);
        if let (0, Some(gate)) = (previous_calls, &self.first_detail_gate) {
            gate.notified().await;
        }
        self.details
            .get(&native_id)
            .cloned()
            .ok_or_else(|| network_error("information"))
    }

    async fn complex_search(&self, query: &ProviderQuery) -> ProviderResult<Vec<SearchResultCard>> {
        self.complex_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_query.lock().unwrap() = Some(query.clone());
        self.cards
            .clone()
            .ok_or_else(|| network_error("complexSearch"))
    }
}

/// In-memory meal catalog
#[derive(Default)]
pub struct FakeCatalog {
    pub meals: Vec<MealRecord>,
    pub lookup_calls: AtomicUsize,
}

impl FakeCatalog {
    pub fn with_meals(meals: Vec<MealRecord>) -> Self {
        Self {
            meals,
            lookup_calls: AtomicUsize::new(0),
        }
    }

    pub fn lookup_count(&self) -> usize {
        self.lookup_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MealCatalogProvider for FakeCatalog {
    async fn search(&self, term: &str) -> ProviderResult<Vec<MealRecord>> {
        let term = term.to_lowercase();
        Ok(self
            .meals
            .iter()
            .filter(|meal| {
                meal.name
                    .as_deref()
                    .is_some_and(|name| name.to_lowercase().contains(&term))
            })
            .cloned()
            .collect())
    }

    async fn lookup(&self, native_id: &str) -> ProviderResult<MealRecord> {
        self.lookup_calls.fetch_add(1, Ordering::SeqCst);
        self.meals
            .iter()
            .find(|meal| meal.id == native_id)
            .cloned()
            .ok_or_else(|| ProviderError::NotFound {
                provider: "mealdb".to_owned(),
                resource_type: "meal".to_owned(),
                resource_id: native_id.to_owned(),
            })
    }
}

/// Backend whose every operation fails
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("storage disabled".to_owned()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("storage disabled".to_owned()))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("storage disabled".to_owned()))
    }
}

/// Backend that reads fine but refuses writes
pub struct ReadOnlyStore {
    pub values: HashMap<String, String>,
}

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("read-only".to_owned()))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("read-only".to_owned()))
    }
}
