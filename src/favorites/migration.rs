// ABOUTME: Persisted favorites format and one-time migration of legacy identity schemes
// ABOUTME: Re-keys bare meal ids and saved ingredient-match cards under canonical ids
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Persisted favorites format.
//!
//! The canonical value is a versioned document:
//!
//! ```json
//! { "version": 2, "entries": [ { "id": "mealdb:52772", "snapshot": { ... }, ... } ] }
//! ```
//!
//! Two older formats are still read:
//!
//! - a JSON array of bare TheMealDB ids (`["52772", "52959"]`), re-keyed to
//!   `mealdb:<id>` with placeholder snapshots flagged for refresh;
//! - a JSON array of Spoonacular card objects with numeric `id`, re-keyed to
//!   `spoonacular:<id>` with the card normalized as the snapshot.

use chrono::{DateTime, Utc};
use recipe_providers::{normalize, MealRecord, RawRecipe, SearchResultCard};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::models::{FavoriteEntry, FavoritesSet, ProviderTag, RecipeId};

/// Version written into every canonical document
pub const FORMAT_VERSION: u32 = 2;

#[derive(Serialize, Deserialize)]
struct FavoritesDocument {
    version: u32,
    entries: FavoritesSet,
}

/// Result of reading one stored value
#[derive(Debug, Default)]
pub struct Decoded {
    /// Favorites in stored order
    pub set: FavoritesSet,
    /// How many entries came from a legacy format
    pub migrated: usize,
}

/// Encode a set as the canonical document
///
/// # Errors
///
/// Returns an error if a snapshot cannot be serialized
pub fn encode(set: &FavoritesSet) -> Result<String, serde_json::Error> {
    serde_json::to_string(&FavoritesDocument {
        version: FORMAT_VERSION,
        entries: set.clone(),
    })
}

/// Decode a stored value in the canonical or either legacy format
///
/// Legacy items that carry no usable id are skipped with a warning; every
/// other legacy item is re-keyed.
///
/// # Errors
///
/// Returns an error if the value is not JSON, or is a canonical document whose
/// entries do not parse
pub fn decode(raw: &str, now: DateTime<Utc>) -> Result<Decoded, serde_json::Error> {
    match serde_json::from_str::<Value>(raw)? {
        Value::Null => Ok(Decoded::default()),
        Value::Array(items) => Ok(migrate_legacy(items, now)),
        document => {
            let document: FavoritesDocument = serde_json::from_value(document)?;
            if document.version != FORMAT_VERSION {
                warn!(
                    version = document.version,
                    "Reading favorites document with unexpected version"
                );
            }
            Ok(Decoded {
                set: document.entries,
                migrated: 0,
            })
        }
    }
}

fn migrate_legacy(items: Vec<Value>, now: DateTime<Utc>) -> Decoded {
    let mut decoded = Decoded::default();
    for item in items {
        match legacy_entry(item, now) {
            Some(entry) => {
                if decoded.set.insert(entry) {
                    decoded.migrated += 1;
                }
            }
            None => warn!("Skipping legacy favorite without a usable id"),
        }
    }
    decoded
}

fn legacy_entry(item: Value, now: DateTime<Utc>) -> Option<FavoriteEntry> {
    match item {
        Value::String(text) => {
            let text = text.trim();
            if text.is_empty() {
                return None;
            }
            let id = text
                .parse::<RecipeId>()
                .unwrap_or_else(|_| RecipeId::new(ProviderTag::MealDb, text));
            Some(FavoriteEntry::placeholder(&id, now))
        }
        Value::Number(number) => {
            let native = number.as_u64()?;
            let id = RecipeId::new(ProviderTag::Spoonacular, native.to_string());
            Some(FavoriteEntry::placeholder(&id, now))
        }
        Value::Object(ref fields) if fields.contains_key("idMeal") => {
            let meal: MealRecord = serde_json::from_value(item).ok()?;
            snapshot_entry(&RawRecipe::Meal(meal), now)
        }
        Value::Object(ref fields) if fields.get("id").is_some_and(Value::is_u64) => {
            let card: SearchResultCard = serde_json::from_value(item).ok()?;
            snapshot_entry(&RawRecipe::SearchResult(card), now)
        }
        _ => None,
    }
}

fn snapshot_entry(raw: &RawRecipe, now: DateTime<Utc>) -> Option<FavoriteEntry> {
    let recipe = normalize(raw);
    let id = recipe.recipe_id()?;
    Some(FavoriteEntry::new(&id, recipe, now))
}
